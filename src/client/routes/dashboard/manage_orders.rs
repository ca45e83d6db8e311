use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{
            dashboard::RoleGate, EmptyState, ErrorMessage, Loading, OrderStatusBadge, SectionTitle,
        },
        store::{
            query::{use_query, QueryKey, QueryResource},
            toast::{notify_error, notify_success},
            use_api, use_query_cache, use_session, use_toasts,
        },
        util::{
            format,
            lifecycle::{self, Optimistic},
        },
    },
    model::{
        order::{OrderDto, OrderStatus},
        user::Role,
    },
};

fn review_button(status: OrderStatus) -> (&'static str, &'static str) {
    match status {
        OrderStatus::Approved => ("Approve", "btn btn-xs btn-success"),
        _ => ("Reject", "btn btn-xs btn-error"),
    }
}

fn review_message(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Approved => "Order approved successfully",
        OrderStatus::Rejected => "Order rejected successfully",
        _ => "Order status updated",
    }
}

#[component]
fn SellerOrderRow(order: OrderDto) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut cache = use_query_cache();
    let mut status = use_signal(|| Optimistic::new(order.status));

    // Refetched rows replace the confirmed status unless a review is in flight.
    use_effect(use_reactive!(|order| {
        status.write().sync(order.status);
    }));

    let order_id = order.id.clone();
    let review = use_callback(move |next: OrderStatus| {
        let current = status.peek().displayed();
        let next = match lifecycle::review_order(current, next) {
            Ok(next) => next,
            Err(e) => {
                notify_error(toasts, e.to_string());
                return;
            }
        };

        status.write().begin(next);
        let api = api.clone();
        let order_id = order_id.clone();
        spawn(async move {
            match api.update_order_status(&order_id, next).await {
                Ok(_) => {
                    status.write().commit();
                    notify_success(toasts, review_message(next));
                    cache.write().invalidate(&QueryResource::ORDERS);
                }
                Err(e) => {
                    tracing::error!("Failed to review order {}: {}", order_id, e);
                    status.write().rollback();
                    notify_error(toasts, e.user_message("Error updating order status"));
                }
            }
        });
    });

    let current = status.read().displayed();
    let in_flight = status.read().is_pending();

    rsx!(
        tr {
            td { "{order.name}" }
            td { "{order.customer}" }
            td { "{order.quantity}" }
            td { "{format::money(order.price)}" }
            td { OrderStatusBadge { status: current } }
            td {
                div { class: "flex gap-2",
                    for (option, (label, class)) in current
                        .review_options()
                        .iter()
                        .map(|option| (*option, review_button(*option)))
                    {
                        button {
                            class,
                            disabled: in_flight,
                            onclick: move |_| review.call(option),
                            "{label}"
                        }
                    }
                    if current.review_options().is_empty() {
                        span { class: "text-xs text-base-content/60", "No action" }
                    }
                }
            }
        }
    )
}

#[component]
fn SellerOrders(email: String) -> Element {
    let orders = use_query(
        QueryKey::scoped(QueryResource::SellerOrders, email),
        |api, _| async move { api.get_managed_orders().await },
    );

    rsx!(
        {match &*orders.read() {
            None => rsx!(Loading {}),
            Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load bookings") }),
            Some(Ok(orders)) if orders.is_empty() => rsx!(EmptyState { message: "No booking requests yet" }),
            Some(Ok(orders)) => rsx!(
                div { class: "overflow-x-auto bg-base-100 rounded-box shadow",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Ticket" }
                                th { "Customer" }
                                th { "Quantity" }
                                th { "Total Price" }
                                th { "Status" }
                                th { "Action" }
                            }
                        }
                        tbody {
                            for order in orders.iter() {
                                SellerOrderRow { key: "{order.id}", order: order.clone() }
                            }
                        }
                    }
                }
            ),
        }}
    )
}

#[component]
pub fn ManageOrders() -> Element {
    let session = use_session();
    let email = session.read().email().unwrap_or_default().to_string();

    rsx!(
        Title { "TicketMaster | Requested Bookings" }
        RoleGate { role: Role::Seller,
            SectionTitle { title: "Requested Bookings" }
            SellerOrders { email }
        }
    )
}

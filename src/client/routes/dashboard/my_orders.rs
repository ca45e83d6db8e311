use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{
            dashboard::RoleGate, ConfirmModal, Countdown, EmptyState, ErrorMessage, Loading,
            OrderStatusBadge, PaymentModal, SectionTitle,
        },
        store::{
            query::{use_query, QueryKey, QueryResource},
            toast::{notify_error, notify_success},
            use_api, use_query_cache, use_session, use_toasts,
        },
        util::{countdown::Precision, format, lifecycle},
    },
    model::{order::OrderDto, user::Role},
};

#[component]
fn OrderCard(order: OrderDto) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut cache = use_query_cache();
    let mut paying = use_signal(|| false);
    let mut confirming = use_signal(|| false);
    let mut cancelling = use_signal(|| false);

    let image = order.image.clone().unwrap_or_default();
    let departure_time = order.departure_time.as_deref().map(format::time_12h);

    let order_id = order.id.clone();
    let status = order.status;
    let cancel = move |_: ()| {
        if let Err(e) = lifecycle::cancel_order(status) {
            notify_error(toasts, e.to_string());
            confirming.set(false);
            return;
        }

        let api = api.clone();
        let order_id = order_id.clone();
        spawn(async move {
            cancelling.set(true);
            match api.cancel_order(&order_id).await {
                Ok(_) => {
                    notify_success(toasts, "Booking cancelled successfully");
                    cache.write().invalidate(&QueryResource::ORDERS);
                    cache.write().invalidate(&QueryResource::TICKETS);
                }
                Err(e) => {
                    tracing::error!("Failed to cancel order {}: {}", order_id, e);
                    notify_error(toasts, e.user_message("Error cancelling booking"));
                }
            }
            cancelling.set(false);
            confirming.set(false);
        });
    };

    rsx!(
        div { class: "card bg-base-100 shadow-md hover:shadow-lg transition",
            figure { class: "h-48 bg-base-200",
                img { class: "w-full h-full object-cover", src: "{image}", alt: "{order.name}" }
            }
            div { class: "card-body gap-3 p-4",
                h3 { class: "card-title text-lg truncate", "{order.name}" }
                if let Some(route) = order.route() {
                    p { class: "text-sm font-semibold", "{route}" }
                }
                div { class: "text-xs space-y-1",
                    if let Some(date) = &order.departure_date {
                        p {
                            strong { "Date: " }
                            "{date}"
                        }
                    }
                    if let Some(time) = departure_time {
                        p {
                            strong { "Time: " }
                            "{time}"
                        }
                    }
                }
                div { class: "rounded bg-base-200 p-2 text-center text-sm font-semibold",
                    Countdown {
                        date: order.departure_date.clone(),
                        time: order.departure_time.clone(),
                        precision: Precision::Minutes,
                    }
                }
                div { class: "flex items-center justify-between border-t border-base-300 pt-2",
                    div {
                        p { class: "text-xs text-base-content/60", "Quantity" }
                        p { class: "text-lg font-bold", "{order.quantity}" }
                    }
                    div { class: "text-right",
                        p { class: "text-xs text-base-content/60", "Total Price" }
                        p { class: "text-lg font-bold text-primary", "{format::money(order.price)}" }
                    }
                }
                div { class: "flex justify-center",
                    OrderStatusBadge { status: order.status }
                }
                div { class: "card-actions flex-nowrap pt-2",
                    button {
                        class: "btn btn-success btn-sm flex-1",
                        disabled: !order.status.is_payable(),
                        onclick: move |_| paying.set(true),
                        "Pay Now"
                    }
                    button {
                        class: "btn btn-error btn-sm flex-1",
                        disabled: !order.status.is_cancellable(),
                        onclick: move |_| confirming.set(true),
                        "Cancel"
                    }
                }
            }
        }
        if paying() {
            PaymentModal { order: order.clone(), on_close: move |_| paying.set(false) }
        }
        if confirming() {
            ConfirmModal {
                title: "Cancel Booking",
                message: "Are you sure you want to cancel this booking?",
                confirm_label: "Yes, Cancel",
                busy: cancelling(),
                on_confirm: cancel,
                on_cancel: move |_| confirming.set(false),
            }
        }
    )
}

#[component]
fn CustomerOrders(email: String) -> Element {
    let orders = use_query(
        QueryKey::scoped(QueryResource::CustomerOrders, email),
        |api, _| async move { api.get_my_orders().await },
    );

    rsx!(
        {match &*orders.read() {
            None => rsx!(Loading {}),
            Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load bookings") }),
            Some(Ok(orders)) if orders.is_empty() => rsx!(EmptyState { message: "No bookings yet" }),
            Some(Ok(orders)) => rsx!(
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for order in orders.iter() {
                        OrderCard { key: "{order.id}", order: order.clone() }
                    }
                }
            ),
        }}
    )
}

#[component]
pub fn MyOrders() -> Element {
    let session = use_session();
    let email = session.read().email().unwrap_or_default().to_string();

    rsx!(
        Title { "TicketMaster | My Bookings" }
        RoleGate { role: Role::Customer,
            SectionTitle { title: "My Booked Tickets" }
            CustomerOrders { email }
        }
    )
}

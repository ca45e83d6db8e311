use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{
            dashboard::RoleGate, EmptyState, ErrorMessage, Loading, SectionTitle,
            TicketStatusBadge,
        },
        store::{
            query::{use_query, QueryKey, QueryResource},
            toast::{notify_error, notify_success},
            use_api, use_query_cache, use_toasts,
        },
        util::{
            format,
            lifecycle::{self, Optimistic},
        },
    },
    model::{
        ticket::{TicketDto, TicketPatchDto, TicketStatus},
        user::Role,
    },
};

#[component]
fn ManageTicketRow(ticket: TicketDto) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut cache = use_query_cache();
    let mut status = use_signal(|| Optimistic::new(ticket.status));

    use_effect(use_reactive!(|ticket| {
        status.write().sync(ticket.status);
    }));

    let ticket_id = ticket.id.clone();
    let review = use_callback(move |next: TicketStatus| {
        let next = match lifecycle::review_ticket(status.peek().displayed(), next) {
            Ok(next) => next,
            Err(e) => {
                notify_error(toasts, e.to_string());
                return;
            }
        };
        let (success, failure) = match next {
            TicketStatus::Approved => ("Ticket approved successfully", "Error approving ticket"),
            _ => ("Ticket rejected successfully", "Error rejecting ticket"),
        };

        status.write().begin(next);
        let api = api.clone();
        let ticket_id = ticket_id.clone();
        spawn(async move {
            let patch = TicketPatchDto {
                status: Some(next),
                ..Default::default()
            };
            match api.update_ticket(&ticket_id, &patch).await {
                Ok(_) => {
                    status.write().commit();
                    notify_success(toasts, success);
                    cache.write().invalidate(&QueryResource::TICKETS);
                }
                Err(e) => {
                    tracing::error!("Failed to review ticket {}: {}", ticket_id, e);
                    status.write().rollback();
                    notify_error(toasts, e.user_message(failure));
                }
            }
        });
    });

    let current = status.read().displayed();
    let locked = current.is_terminal() || status.read().is_pending();

    rsx!(
        tr {
            td { "{ticket.name}" }
            td { "{ticket.route()}" }
            td { "{ticket.transport_type}" }
            td { "{format::money(ticket.price)}" }
            td { "{ticket.quantity}" }
            td { "{ticket.seller.email}" }
            td { TicketStatusBadge { status: current } }
            td {
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-xs btn-success",
                        disabled: locked,
                        onclick: move |_| review.call(TicketStatus::Approved),
                        "Approve"
                    }
                    button {
                        class: "btn btn-xs btn-error",
                        disabled: locked,
                        onclick: move |_| review.call(TicketStatus::Rejected),
                        "Reject"
                    }
                }
            }
        }
    )
}

#[component]
pub fn ManageTickets() -> Element {
    rsx!(
        Title { "TicketMaster | Manage Tickets" }
        RoleGate { role: Role::Admin,
            SectionTitle { title: "Manage Tickets" }
            AllTicketsTable {}
        }
    )
}

#[component]
fn AllTicketsTable() -> Element {
    let tickets = use_query(
        QueryKey::new(QueryResource::ManagedTickets),
        |api, _| async move { api.get_all_tickets().await },
    );

    rsx!(
        {match &*tickets.read() {
            None => rsx!(Loading {}),
            Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load tickets") }),
            Some(Ok(tickets)) if tickets.is_empty() => rsx!(EmptyState { message: "No tickets to review" }),
            Some(Ok(tickets)) => rsx!(
                div { class: "overflow-x-auto bg-base-100 rounded-box shadow",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Route" }
                                th { "Transport" }
                                th { "Price" }
                                th { "Quantity" }
                                th { "Seller" }
                                th { "Status" }
                                th { "Action" }
                            }
                        }
                        tbody {
                            for ticket in tickets.iter() {
                                ManageTicketRow { key: "{ticket.id}", ticket: ticket.clone() }
                            }
                        }
                    }
                }
            ),
        }}
    )
}

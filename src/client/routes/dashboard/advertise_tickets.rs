use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{dashboard::RoleGate, EmptyState, ErrorMessage, Loading, SectionTitle},
        store::{
            query::{use_query, QueryKey, QueryResource},
            toast::{notify_error, notify_success},
            use_api, use_query_cache, use_toasts,
        },
        util::{format, lifecycle},
    },
    model::{
        ticket::{TicketDto, TicketPatchDto, MAX_ADVERTISED},
        user::Role,
    },
};

#[component]
fn AdvertiseRow(ticket: TicketDto, advertised_count: usize) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut cache = use_query_cache();
    let mut saving = use_signal(|| false);

    let toggle_ticket = ticket.clone();
    let toggle = move |_: MouseEvent| {
        // The slot limit is checked locally, a full board never reaches the backend.
        let advertise = match lifecycle::toggle_advertised(&toggle_ticket, advertised_count) {
            Ok(advertise) => advertise,
            Err(e) => {
                notify_error(toasts, e.to_string());
                return;
            }
        };

        let api = api.clone();
        let ticket_id = toggle_ticket.id.clone();
        spawn(async move {
            saving.set(true);
            let patch = TicketPatchDto {
                is_advertised: Some(advertise),
                ..Default::default()
            };
            match api.update_ticket(&ticket_id, &patch).await {
                Ok(_) => {
                    let message = if advertise {
                        "Ticket advertised successfully"
                    } else {
                        "Ticket unadvertised"
                    };
                    notify_success(toasts, message);
                    cache.write().invalidate(&QueryResource::TICKETS);
                }
                Err(e) => {
                    tracing::error!("Failed to toggle advertisement for {}: {}", ticket_id, e);
                    notify_error(toasts, e.user_message("Error updating advertisement status"));
                }
            }
            saving.set(false);
        });
    };

    let image = ticket.image.clone().unwrap_or_default();
    let (button_label, button_class) = if ticket.is_advertised {
        ("Unadvertise", "btn btn-xs btn-outline")
    } else {
        ("Advertise", "btn btn-xs btn-primary")
    };

    rsx!(
        tr {
            td {
                div { class: "flex items-center gap-3",
                    img { class: "h-12 w-12 rounded object-cover", src: "{image}", alt: "{ticket.name}" }
                    span { "{ticket.name}" }
                }
            }
            td { "{ticket.route()}" }
            td { "{format::money(ticket.price)}" }
            td { "{ticket.seller.name}" }
            td {
                if ticket.is_advertised {
                    span { class: "badge badge-success", "Advertised" }
                } else {
                    span { class: "badge badge-ghost", "Not advertised" }
                }
            }
            td {
                button {
                    class: button_class,
                    disabled: saving(),
                    onclick: toggle,
                    "{button_label}"
                }
            }
        }
    )
}

#[component]
pub fn AdvertiseTickets() -> Element {
    rsx!(
        Title { "TicketMaster | Advertise Tickets" }
        RoleGate { role: Role::Admin,
            SectionTitle { title: "Advertise Tickets" }
            AdvertiseTable {}
        }
    )
}

#[component]
fn AdvertiseTable() -> Element {
    let tickets = use_query(
        QueryKey::new(QueryResource::ApprovedTickets),
        |api, _| async move { api.get_approved_tickets().await },
    );

    rsx!(
        {match &*tickets.read() {
            None => rsx!(Loading {}),
            Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load tickets") }),
            Some(Ok(tickets)) if tickets.is_empty() => rsx!(EmptyState { message: "No approved tickets yet" }),
            Some(Ok(tickets)) => {
                let advertised_count = lifecycle::advertised_count(tickets);
                    rsx!(
                    p { class: "mb-4 text-sm",
                        "Advertised: {advertised_count} / {MAX_ADVERTISED}"
                    }
                    div { class: "overflow-x-auto bg-base-100 rounded-box shadow",
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Ticket" }
                                    th { "Route" }
                                    th { "Price" }
                                    th { "Seller" }
                                    th { "Status" }
                                    th { "Advertise" }
                                }
                            }
                            tbody {
                                for ticket in tickets.iter() {
                                    AdvertiseRow {
                                        key: "{ticket.id}",
                                        ticket: ticket.clone(),
                                        advertised_count,
                                    }
                                }
                            }
                        }
                    }
                )
            }
        }}
    )
}

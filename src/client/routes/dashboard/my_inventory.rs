use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{
            dashboard::RoleGate, ConfirmModal, EmptyState, ErrorMessage, Loading, Modal,
            SectionTitle, TicketStatusBadge,
        },
        store::{
            query::{use_query, QueryKey, QueryResource},
            toast::{notify_error, notify_success},
            use_api, use_query_cache, use_session, use_toasts,
        },
        util::{
            form::{InventoryEdit, TicketField},
            format,
        },
    },
    model::{ticket::TicketDto, user::Role},
};

#[component]
fn UpdateTicketModal(ticket: TicketDto, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut cache = use_query_cache();
    let mut edit = use_signal(|| InventoryEdit {
        price: ticket.price.to_string(),
        quantity: ticket.quantity.to_string(),
    });
    let mut saving = use_signal(|| false);

    let ticket_id = ticket.id.clone();
    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let patch = match edit.read().validate() {
            Ok(patch) => patch,
            Err(e) => {
                notify_error(toasts, e.to_string());
                return;
            }
        };

        let api = api.clone();
        let ticket_id = ticket_id.clone();
        spawn(async move {
            saving.set(true);
            match api.update_ticket(&ticket_id, &patch).await {
                Ok(_) => {
                    notify_success(toasts, "Ticket updated successfully");
                    cache.write().invalidate(&QueryResource::TICKETS);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to update ticket {}: {}", ticket_id, e);
                    notify_error(toasts, e.user_message("Error updating ticket"));
                }
            }
            saving.set(false);
        });
    };

    rsx!(
        Modal { title: "Update Ticket Info", on_close,
            form { class: "flex flex-col gap-3", onsubmit,
                p { class: "font-semibold", "{ticket.name}" }
                label { class: "form-control w-full",
                    span { class: "label-text", "{TicketField::Price.label()}" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "number",
                        step: "0.01",
                        value: "{edit.read().price}",
                        oninput: move |e| edit.write().price = e.value(),
                    }
                }
                label { class: "form-control w-full",
                    span { class: "label-text", "{TicketField::Quantity.label()}" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "number",
                        value: "{edit.read().quantity}",
                        oninput: move |e| edit.write().quantity = e.value(),
                    }
                }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button { class: "btn btn-primary", r#type: "submit", disabled: saving(),
                        if saving() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Update"
                    }
                }
            }
        }
    )
}

#[component]
fn InventoryRow(ticket: TicketDto) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut cache = use_query_cache();
    let mut editing = use_signal(|| false);
    let mut confirming = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let ticket_id = ticket.id.clone();
    let delete = move |_: ()| {
        let api = api.clone();
        let ticket_id = ticket_id.clone();
        spawn(async move {
            deleting.set(true);
            match api.delete_ticket(&ticket_id).await {
                Ok(_) => {
                    notify_success(toasts, "Ticket deleted successfully");
                    cache.write().invalidate(&QueryResource::TICKETS);
                    cache.write().invalidate(&[QueryResource::Statistics]);
                }
                Err(e) => {
                    tracing::error!("Failed to delete ticket {}: {}", ticket_id, e);
                    notify_error(toasts, e.user_message("Error deleting ticket"));
                }
            }
            deleting.set(false);
            confirming.set(false);
        });
    };

    rsx!(
        tr {
            td { "{ticket.name}" }
            td { "{ticket.route()}" }
            td { "{ticket.transport_type}" }
            td { "{format::money(ticket.price)}" }
            td { "{ticket.quantity}" }
            td { TicketStatusBadge { status: ticket.status } }
            td {
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-xs btn-outline",
                        onclick: move |_| editing.set(true),
                        "Update"
                    }
                    button {
                        class: "btn btn-xs btn-error",
                        onclick: move |_| confirming.set(true),
                        "Delete"
                    }
                }
                if editing() {
                    UpdateTicketModal { ticket: ticket.clone(), on_close: move |_| editing.set(false) }
                }
                if confirming() {
                    ConfirmModal {
                        title: "Delete Ticket",
                        message: "Are you sure you want to delete {ticket.name}?",
                        confirm_label: "Delete",
                        busy: deleting(),
                        on_confirm: delete,
                        on_cancel: move |_| confirming.set(false),
                    }
                }
            }
        }
    )
}

#[component]
fn Inventory(email: String) -> Element {
    let tickets = use_query(
        QueryKey::scoped(QueryResource::Inventory, email),
        |api, _| async move { api.get_inventory().await },
    );

    rsx!(
        {match &*tickets.read() {
            None => rsx!(Loading {}),
            Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load tickets") }),
            Some(Ok(tickets)) if tickets.is_empty() => rsx!(EmptyState { message: "You have not added any tickets yet" }),
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
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for ticket in tickets.iter() {
                                InventoryRow { key: "{ticket.id}", ticket: ticket.clone() }
                            }
                        }
                    }
                }
            ),
        }}
    )
}

#[component]
pub fn MyInventory() -> Element {
    let session = use_session();
    let email = session.read().email().unwrap_or_default().to_string();

    rsx!(
        Title { "TicketMaster | My Added Tickets" }
        RoleGate { role: Role::Seller,
            SectionTitle { title: "My Added Tickets" }
            Inventory { email }
        }
    )
}

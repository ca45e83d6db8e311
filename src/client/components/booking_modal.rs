use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::Modal,
        store::{
            query::QueryResource,
            toast::{notify_error, notify_success},
            use_api, use_query_cache, use_session, use_toasts,
        },
        util::{
            booking::{order_snapshot, parse_quantity, transaction_tag, BookingAvailability},
            format,
            time::{local_now, unix_millis},
        },
    },
    model::ticket::TicketDto,
};

#[component]
pub fn BookingModal(ticket: TicketDto, on_close: EventHandler<()>) -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let mut cache = use_query_cache();
    let api = use_api();

    let mut quantity = use_signal(|| "1".to_string());
    let mut field_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let total = parse_quantity(&quantity.read(), ticket.quantity)
        .map(|q| ticket.price * f64::from(q))
        .unwrap_or(0.0);

    let submit_ticket = ticket.clone();
    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let ticket = submit_ticket.clone();
        let api = api.clone();

        // The form may have been opened before departure.
        if let Some(reason) = BookingAvailability::of(&ticket, local_now()).refusal() {
            field_error.set(Some(reason.to_string()));
            return;
        }
        let quantity = match parse_quantity(&quantity.read(), ticket.quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                field_error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(email) = session.read().email().map(str::to_string) else {
            notify_error(toasts, "Please log in to book tickets");
            return;
        };
        field_error.set(None);

        spawn(async move {
            submitting.set(true);
            let tag = transaction_tag(unix_millis(), &mut rand::rng());
            let order = order_snapshot(&ticket, quantity, &email, tag);

            match api.create_order(&order).await {
                Ok(_) => {
                    tracing::info!("Booked {} x {}", quantity, ticket.id);
                    notify_success(toasts, "Booking successful! Waiting for seller approval.");
                    cache.write().invalidate(&QueryResource::TICKETS);
                    cache.write().invalidate(&QueryResource::ORDERS);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("Booking failed: {}", e);
                    notify_error(toasts, e.user_message("Booking failed"));
                }
            }
            submitting.set(false);
        });
    };

    rsx!(
        Modal { title: "Book {ticket.name}", on_close,
            form { class: "flex flex-col gap-3", onsubmit,
                p { class: "text-sm", "{ticket.route()}" }
                p { class: "text-sm", "Unit price: {format::money(ticket.price)} | Available: {ticket.quantity}" }
                label { class: "form-control",
                    span { class: "label-text", "Quantity" }
                    input {
                        class: "input input-bordered",
                        r#type: "number",
                        min: "1",
                        max: "{ticket.quantity}",
                        value: "{quantity}",
                        oninput: move |e| quantity.set(e.value()),
                    }
                    if let Some(error) = field_error() {
                        span { class: "text-error text-sm mt-1", "{error}" }
                    }
                }
                p { class: "font-semibold", "Total: {format::money(total)}" }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Confirm Booking"
                    }
                }
            }
        }
    )
}

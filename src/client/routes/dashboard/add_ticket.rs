use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{dashboard::RoleGate, SectionTitle},
        store::{
            query::QueryResource,
            toast::{notify_error, notify_success},
            use_api, use_query_cache, use_session, use_toasts,
        },
        util::form::{FormErrors, TicketField, TicketForm},
    },
    model::{
        ticket::{TransportType, PERK_OPTIONS},
        user::Role,
    },
};

/// Labelled input with the validation message for its field underneath.
#[component]
fn TextField(
    field: TicketField,
    value: String,
    input_type: Option<&'static str>,
    placeholder: Option<&'static str>,
    #[props(!optional)] error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let input_type = input_type.unwrap_or("text");
    let placeholder = placeholder.unwrap_or_default();
    let input_class = if error.is_some() {
        "input input-bordered input-error w-full"
    } else {
        "input input-bordered w-full"
    };

    rsx!(
        label { class: "form-control w-full",
            span { class: "label-text mb-1", "{field.label()}" }
            input {
                class: input_class,
                r#type: input_type,
                placeholder,
                value,
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(error) = error {
                span { class: "text-error text-xs mt-1", "{error}" }
            }
        }
    )
}

#[component]
fn AddTicketForm() -> Element {
    let session = use_session();
    let api = use_api();
    let toasts = use_toasts();
    let mut cache = use_query_cache();

    let mut form = use_signal(TicketForm::default);
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);

    let seller = session.read().user.as_ref().map(|user| user.as_seller());
    let error = move |field: TicketField| errors.read().message(field).map(str::to_string);

    let submit_seller = seller.clone();
    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let Some(seller) = submit_seller.clone() else {
            notify_error(toasts, "Please log in to continue");
            return;
        };

        let ticket = match form.read().validate(seller) {
            Ok(ticket) => ticket,
            Err(e) => {
                notify_error(toasts, e.to_string());
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());

        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.create_ticket(&ticket).await {
                Ok(_) => {
                    notify_success(toasts, "Ticket added successfully");
                    form.set(TicketForm::default());
                    cache.write().invalidate(&QueryResource::TICKETS);
                    cache.write().invalidate(&[QueryResource::Statistics]);
                }
                Err(e) => {
                    tracing::error!("Failed to add ticket {}: {}", ticket.name, e);
                    notify_error(toasts, e.user_message("Error adding ticket"));
                }
            }
            saving.set(false);
        });
    };

    let snapshot = form();

    rsx!(
        form { class: "card bg-base-100 shadow p-6 grid gap-4 md:grid-cols-2", onsubmit,
            TextField {
                field: TicketField::Name,
                value: snapshot.name.clone(),
                placeholder: "e.g., Dhaka to Chittagong Express",
                error: error(TicketField::Name),
                oninput: move |value| form.write().name = value,
            }
            TextField {
                field: TicketField::Image,
                value: snapshot.image.clone(),
                input_type: "url",
                placeholder: "https://",
                error: error(TicketField::Image),
                oninput: move |value| form.write().image = value,
            }
            TextField {
                field: TicketField::From,
                value: snapshot.from.clone(),
                placeholder: "Departure location",
                error: error(TicketField::From),
                oninput: move |value| form.write().from = value,
            }
            TextField {
                field: TicketField::To,
                value: snapshot.to.clone(),
                placeholder: "Destination location",
                error: error(TicketField::To),
                oninput: move |value| form.write().to = value,
            }
            label { class: "form-control w-full",
                span { class: "label-text mb-1", "{TicketField::TransportType.label()}" }
                select {
                    class: "select select-bordered w-full",
                    value: snapshot.transport_type.clone(),
                    onchange: move |e| form.write().transport_type = e.value(),
                    option { value: "", disabled: true, "Select transport type" }
                    for transport in TransportType::ALL {
                        option { value: transport.as_str(), "{transport}" }
                    }
                }
                if let Some(message) = error(TicketField::TransportType) {
                    span { class: "text-error text-xs mt-1", "{message}" }
                }
            }
            TextField {
                field: TicketField::DepartureDate,
                value: snapshot.departure_date.clone(),
                input_type: "date",
                error: error(TicketField::DepartureDate),
                oninput: move |value| form.write().departure_date = value,
            }
            TextField {
                field: TicketField::DepartureTime,
                value: snapshot.departure_time.clone(),
                input_type: "time",
                error: error(TicketField::DepartureTime),
                oninput: move |value| form.write().departure_time = value,
            }
            TextField {
                field: TicketField::Price,
                value: snapshot.price.clone(),
                input_type: "number",
                placeholder: "Price per ticket",
                error: error(TicketField::Price),
                oninput: move |value| form.write().price = value,
            }
            TextField {
                field: TicketField::Quantity,
                value: snapshot.quantity.clone(),
                input_type: "number",
                placeholder: "Available tickets",
                error: error(TicketField::Quantity),
                oninput: move |value| form.write().quantity = value,
            }
            div { class: "md:col-span-2",
                span { class: "label-text", "Perks" }
                div { class: "flex flex-wrap gap-4 mt-2",
                    for perk in PERK_OPTIONS {
                        label { class: "label cursor-pointer gap-2",
                            input {
                                class: "checkbox checkbox-primary checkbox-sm",
                                r#type: "checkbox",
                                checked: snapshot.has_perk(perk),
                                onchange: move |_| form.write().toggle_perk(perk),
                            }
                            span { "{perk}" }
                        }
                    }
                }
            }
            if let Some(seller) = seller {
                div { class: "md:col-span-2 grid gap-4 md:grid-cols-2",
                    label { class: "form-control w-full",
                        span { class: "label-text mb-1", "Vendor Name" }
                        input { class: "input input-bordered w-full", readonly: true, value: "{seller.name}" }
                    }
                    label { class: "form-control w-full",
                        span { class: "label-text mb-1", "Vendor Email" }
                        input { class: "input input-bordered w-full", readonly: true, value: "{seller.email}" }
                    }
                }
            }
            button {
                class: "btn btn-primary md:col-span-2",
                r#type: "submit",
                disabled: saving(),
                if saving() {
                    span { class: "loading loading-spinner loading-sm" }
                }
                "Add Ticket"
            }
        }
    )
}

#[component]
pub fn AddTicket() -> Element {
    rsx!(
        Title { "TicketMaster | Add Ticket" }
        RoleGate { role: Role::Seller,
            SectionTitle { title: "Add Ticket" }
            AddTicketForm {}
        }
    )
}

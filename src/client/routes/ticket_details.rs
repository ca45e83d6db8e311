use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{BookingModal, Countdown, ErrorMessage, Loading, Page},
        router::Route,
        store::{
            query::{use_query, QueryKey, QueryResource},
            toast::notify_error,
            use_session, use_toasts,
        },
        util::{
            booking::BookingAvailability,
            countdown::Precision,
            format,
            time::local_now,
        },
    },
    model::ticket::TicketDto,
};

#[component]
fn TicketInfo(ticket: TicketDto) -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let mut booking = use_signal(|| false);
    let mut departed = use_signal(|| false);

    let availability = if departed() {
        BookingAvailability::Departed
    } else {
        BookingAvailability::of(&ticket, local_now())
    };
    let departure_time = ticket.departure_time.as_deref().map(format::time_12h);
    let image = ticket.image.clone().unwrap_or_default();

    let book = move |_: MouseEvent| {
        if session.read().is_signed_in() {
            booking.set(true);
        } else {
            notify_error(toasts, "Please log in to book tickets");
            navigator().push(Route::Login {});
        }
    };

    rsx!(
        div { class: "grid gap-8 lg:grid-cols-2",
            img { class: "w-full rounded-box object-cover max-h-[420px]", src: "{image}", alt: "{ticket.name}" }
            div { class: "flex flex-col gap-3",
                h1 { class: "text-3xl font-bold", "{ticket.name}" }
                p { class: "text-lg", "{ticket.route()}" }
                div { class: "flex gap-2",
                    span { class: "badge badge-primary", "{ticket.transport_type}" }
                    span { class: "badge badge-outline", "{ticket.quantity} seats available" }
                }
                p { class: "text-2xl font-bold text-primary", "{format::money(ticket.price)} per ticket" }
                if let Some(date) = &ticket.departure_date {
                    p { "Departure: {date} {departure_time.clone().unwrap_or_default()}" }
                }
                div { class: "flex items-center gap-2",
                    span { class: "font-semibold", "Departs in:" }
                    Countdown {
                        date: ticket.departure_date.clone(),
                        time: ticket.departure_time.clone(),
                        precision: Precision::Seconds,
                        class: "text-lg",
                        on_expire: move |_| departed.set(true),
                    }
                }
                if !ticket.perks.is_empty() {
                    div { class: "flex flex-wrap gap-2",
                        for perk in ticket.perks.iter() {
                            span { class: "badge badge-ghost", "{perk}" }
                        }
                    }
                }
                div { class: "flex items-center gap-3 mt-2",
                    if let Some(photo) = &ticket.seller.image {
                        img { class: "w-10 h-10 rounded-full", src: "{photo}", alt: "{ticket.seller.name}" }
                    }
                    div {
                        p { class: "font-semibold", "{ticket.seller.name}" }
                        p { class: "text-sm text-base-content/60", "{ticket.seller.email}" }
                    }
                }
                button {
                    class: "btn btn-primary mt-4 w-full md:w-60",
                    disabled: !availability.is_available(),
                    onclick: book,
                    "{availability.button_label()}"
                }
            }
        }
        if booking() {
            BookingModal {
                ticket: ticket.clone(),
                on_close: move |_| booking.set(false),
            }
        }
    )
}

#[component]
pub fn TicketDetails(id: String) -> Element {
    let ticket = use_query(
        QueryKey::scoped(QueryResource::Ticket, id),
        |api, key| async move { api.get_ticket(key.scope()).await },
    );

    rsx!(
        Title { "TicketMaster | Ticket Details" }
        Page {
            {match &*ticket.read() {
                None => rsx!(Loading {}),
                Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load ticket") }),
                Some(Ok(ticket)) => rsx!(TicketInfo { ticket: ticket.clone() }),
            }}
        }
    )
}

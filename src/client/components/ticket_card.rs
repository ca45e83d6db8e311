use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendar, FaClock, FaLocationDot};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::Countdown,
        router::Route,
        util::{
            countdown::{self, Precision},
            format,
            time::local_now,
        },
    },
    model::ticket::TicketDto,
};

#[component]
pub fn TicketCard(ticket: TicketDto) -> Element {
    let departed = countdown::has_departed(
        ticket.departure_date.as_deref(),
        ticket.departure_time.as_deref(),
        local_now(),
    );
    let (perks, more_perks) = format::perk_preview(&ticket.perks);
    let departure_time = ticket.departure_time.as_deref().map(format::time_12h);
    let image = ticket.image.clone().unwrap_or_default();

    rsx!(
        div { class: "card bg-base-100 shadow-md h-full",
            figure { class: "relative h-48",
                img { class: "h-full w-full object-cover", src: "{image}", alt: "{ticket.name}" }
                span { class: "badge badge-primary absolute left-3 top-3", "{ticket.transport_type}" }
                if departed {
                    span { class: "badge badge-error absolute right-3 top-3", "N/A" }
                }
            }
            div { class: "card-body gap-2",
                h2 { class: "card-title", "{ticket.name}" }
                p { class: "flex items-center gap-2 text-sm",
                    Icon { width: 14, height: 14, icon: FaLocationDot }
                    "{ticket.route()}"
                }
                div { class: "flex flex-wrap gap-3 text-sm text-base-content/70",
                    if let Some(date) = &ticket.departure_date {
                        span { class: "flex items-center gap-1",
                            Icon { width: 12, height: 12, icon: FaCalendar }
                            "{date}"
                        }
                    }
                    if let Some(time) = departure_time {
                        span { class: "flex items-center gap-1",
                            Icon { width: 12, height: 12, icon: FaClock }
                            "{time}"
                        }
                    }
                }
                Countdown {
                    date: ticket.departure_date.clone(),
                    time: ticket.departure_time.clone(),
                    precision: Precision::Minutes,
                    class: "text-sm",
                }
                div { class: "flex flex-wrap gap-1",
                    for perk in perks {
                        span { class: "badge badge-outline badge-sm", "{perk}" }
                    }
                    if let Some(more) = more_perks {
                        span { class: "badge badge-ghost badge-sm", "{more}" }
                    }
                }
                div { class: "flex items-center justify-between mt-auto pt-2",
                    div {
                        p { class: "text-xl font-bold text-primary", "{format::money(ticket.price)}" }
                        p { class: "text-xs text-base-content/60", "{ticket.quantity} seats left" }
                    }
                    Link {
                        to: Route::TicketDetails { id: ticket.id.clone() },
                        class: "btn btn-primary btn-sm",
                        "See Details"
                    }
                }
            }
        }
    )
}

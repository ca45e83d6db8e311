use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRight, FaBus, FaHeadset, FaShieldHalved, FaTags, FaTrain, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{EmptyState, ErrorMessage, Loading, Page, SectionTitle, TicketCard},
        router::Route,
        store::query::{use_query, QueryKey, QueryResource},
        util::catalog::{PopularRoute, POPULAR_ROUTES},
    },
    model::ticket::TransportType,
};

#[component]
fn Hero() -> Element {
    rsx!(
        div { class: "hero min-h-[420px] bg-base-200 rounded-box",
            div { class: "hero-content text-center",
                div { class: "max-w-xl flex flex-col gap-4 items-center",
                    h1 { class: "text-4xl md:text-5xl font-bold", "Travel anywhere, book in seconds" }
                    p { "Bus, train, launch and flight tickets from trusted sellers, all in one place." }
                    Link { to: Route::catalog(), class: "btn btn-primary", "Browse Tickets" }
                }
            }
        }
    )
}

#[component]
fn AdvertisedTickets() -> Element {
    let tickets = use_query(QueryKey::new(QueryResource::AdvertisedTickets), |api, _| async move {
        api.get_advertised_tickets().await
    });

    rsx!(
        section { class: "mt-16",
            SectionTitle {
                title: "Featured Tickets",
                subtitle: "Hand-picked offers promoted by our team.",
            }
            {match &*tickets.read() {
                None => rsx!(Loading {}),
                Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load featured tickets") }),
                Some(Ok(list)) if list.is_empty() => rsx!(EmptyState { message: "No featured tickets right now" }),
                Some(Ok(list)) => rsx!(
                    div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for ticket in list.iter().cloned() {
                            TicketCard { key: "{ticket.id}", ticket }
                        }
                    }
                ),
            }}
        }
    )
}

#[component]
fn LatestTickets() -> Element {
    let tickets = use_query(QueryKey::new(QueryResource::LatestTickets), |api, _| async move {
        api.get_latest_tickets().await
    });

    rsx!(
        section { class: "mt-16",
            SectionTitle {
                title: "Latest Tickets",
                subtitle: "Recently added routes across the country.",
            }
            {match &*tickets.read() {
                None => rsx!(Loading {}),
                Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load latest tickets") }),
                Some(Ok(list)) if list.is_empty() => rsx!(EmptyState { message: "No tickets available yet" }),
                Some(Ok(list)) => rsx!(
                    div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
                        for ticket in list.iter().cloned() {
                            TicketCard { key: "{ticket.id}", ticket }
                        }
                    }
                ),
            }}
        }
    )
}

#[component]
fn RouteCard(route: PopularRoute) -> Element {
    let filter = route.filter();

    rsx!(
        div { class: "card bg-base-100 shadow-md",
            div { class: "card-body gap-3",
                div { class: "flex items-center justify-between",
                    span { class: "badge badge-primary badge-outline gap-1",
                        if route.transport == TransportType::Train {
                            Icon { width: 12, height: 12, icon: FaTrain }
                        } else {
                            Icon { width: 12, height: 12, icon: FaBus }
                        }
                        "{route.transport}"
                    }
                    span { class: "flex items-center gap-1 text-sm opacity-70",
                        Icon { width: 14, height: 14, icon: FaUsers }
                        "{route.passengers} passengers"
                    }
                }
                h3 { class: "card-title flex items-center gap-2",
                    "{route.from}"
                    Icon { width: 16, height: 16, icon: FaArrowRight }
                    "{route.to}"
                }
                div { class: "card-actions justify-end",
                    Link {
                        to: Route::AllTickets { from: filter.from, to: filter.to },
                        class: "btn btn-primary btn-sm",
                        "View Tickets"
                    }
                }
            }
        }
    )
}

#[component]
fn PopularRoutes() -> Element {
    rsx!(
        section { class: "mt-16",
            SectionTitle {
                title: "Popular Routes",
                subtitle: "Explore the most traveled routes on TicketMaster",
            }
            div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for route in POPULAR_ROUTES {
                    RouteCard { key: "{route.from}-{route.to}", route }
                }
            }
        }
    )
}

#[component]
fn Reason(title: String, text: String, children: Element) -> Element {
    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body items-center text-center",
                {children}
                h3 { class: "card-title", "{title}" }
                p { class: "text-sm", "{text}" }
            }
        }
    )
}

#[component]
fn WhyChooseUs() -> Element {
    rsx!(
        section { class: "mt-16",
            SectionTitle { title: "Why Choose Us" }
            div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
                Reason { title: "Secure Payments", text: "Checkout is handled by a trusted payment provider.",
                    Icon { width: 32, height: 32, icon: FaShieldHalved }
                }
                Reason { title: "Best Prices", text: "Compare offers from many sellers on every route.",
                    Icon { width: 32, height: 32, icon: FaTags }
                }
                Reason { title: "Every Transport", text: "Bus, train, launch and flights in one search.",
                    Icon { width: 32, height: 32, icon: FaBus }
                }
                Reason { title: "24/7 Support", text: "We are here whenever your plans change.",
                    Icon { width: 32, height: 32, icon: FaHeadset }
                }
            }
        }
    )
}

const FAQS: [(&str, &str); 5] = [
    (
        "How do I book a ticket?",
        "Open any ticket with \"See Details\", choose how many seats you need and press \"Book Now\". The seller reviews the booking before you pay.",
    ),
    (
        "Can I cancel a booking?",
        "Bookings that have not been paid can be cancelled from \"My Booked Tickets\" in your dashboard.",
    ),
    (
        "Where do I see my booking status?",
        "Your dashboard lists every booking as pending, approved, rejected or paid.",
    ),
    (
        "How do I pay?",
        "Approved bookings show a \"Pay Now\" button that opens a secure hosted checkout.",
    ),
    (
        "How do I become a seller?",
        "Send a seller request from your profile page. An administrator reviews it and upgrades your account.",
    ),
];

#[component]
fn Faq() -> Element {
    rsx!(
        section { class: "mt-16",
            SectionTitle { title: "Frequently Asked Questions" }
            div { class: "flex flex-col gap-2 max-w-3xl mx-auto",
                for (question, answer) in FAQS {
                    div { class: "collapse collapse-arrow bg-base-200",
                        input { r#type: "radio", name: "faq" }
                        div { class: "collapse-title font-semibold", "{question}" }
                        div { class: "collapse-content text-sm", p { "{answer}" } }
                    }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "TicketMaster | Home" }
        Meta {
            name: "description",
            content: "Book bus, train, launch and flight tickets online."
        }
        Page {
            Hero {}
            AdvertisedTickets {}
            LatestTickets {}
            PopularRoutes {}
            WhyChooseUs {}
            Faq {}
        }
    )
}

use dioxus::prelude::*;

use crate::model::{order::OrderStatus, ticket::TicketStatus};

fn badge_class(status: &str) -> &'static str {
    match status {
        "approved" => "badge-success",
        "rejected" => "badge-error",
        "paid" => "badge-info",
        _ => "badge-warning",
    }
}

#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> Element {
    rsx!(
        span { class: "badge {badge_class(status.as_str())}", "{status.label()}" }
    )
}

#[component]
pub fn TicketStatusBadge(status: TicketStatus) -> Element {
    rsx!(
        span { class: "badge {badge_class(status.as_str())}", "{status.label()}" }
    )
}

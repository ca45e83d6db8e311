//! Dashboard landing page with the statistics for the viewer's role.

use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{BarChart, ErrorMessage, Loading, SectionTitle, StatCard},
        store::{
            query::{use_query, QueryKey, QueryResource},
            use_session,
        },
        util::{chart, format},
    },
    model::{
        statistics::{AdminStatisticsDto, CustomerStatisticsDto, SellerStatisticsDto},
        user::Role,
    },
};

#[component]
fn AdminStatistics() -> Element {
    let stats = use_query(
        QueryKey::new(QueryResource::Statistics),
        |api, _| async move { api.get_admin_statistics().await },
    );

    rsx!(
        {match &*stats.read() {
            None => rsx!(Loading {}),
            Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load statistics") }),
            Some(Ok(stats)) => rsx!(AdminCharts { stats: stats.clone() }),
        }}
    )
}

#[component]
fn AdminCharts(stats: AdminStatisticsDto) -> Element {
    rsx!(
        div { class: "grid gap-4 sm:grid-cols-2 xl:grid-cols-4",
            StatCard { title: "Total Revenue", value: format::money(stats.total_revenue) }
            StatCard { title: "Total Orders", value: "{stats.total_orders}" }
            StatCard { title: "Total Tickets", value: "{stats.total_tickets}" }
            StatCard { title: "Total Users", value: "{stats.total_users}" }
        }
        div { class: "grid gap-4 sm:grid-cols-2 mt-4",
            StatCard {
                title: "Average Order Value",
                value: format::money(chart::average_order_value(&stats)),
            }
            StatCard {
                title: "Tickets per Order",
                value: format!("{:.1}", chart::average_tickets_per_order(&stats)),
            }
        }
        div { class: "grid gap-4 lg:grid-cols-2 mt-4",
            BarChart { title: "Revenue by Seller", points: chart::revenue_by_seller(&stats), money: true }
            BarChart { title: "Recent Orders", points: chart::orders_trend(&stats.recent_orders), money: true }
            BarChart { title: "Platform Overview", points: chart::admin_overview(&stats) }
        }
    )
}

#[component]
fn SellerStatistics(email: String) -> Element {
    let stats = use_query(
        QueryKey::scoped(QueryResource::Statistics, email),
        |api, key| async move { api.get_seller_statistics(key.scope()).await },
    );

    rsx!(
        {match &*stats.read() {
            None => rsx!(Loading {}),
            Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load statistics") }),
            Some(Ok(stats)) => rsx!(SellerCharts { stats: stats.clone() }),
        }}
    )
}

#[component]
fn SellerCharts(stats: SellerStatisticsDto) -> Element {
    rsx!(
        div { class: "grid gap-4 sm:grid-cols-2 xl:grid-cols-3",
            StatCard { title: "Total Revenue", value: format::money(stats.total_revenue) }
            StatCard { title: "Tickets Sold", value: "{stats.total_tickets_sold}" }
            StatCard { title: "Tickets Added", value: "{stats.total_tickets_added}" }
            StatCard {
                title: "Revenue per Sale",
                value: format::money(chart::average_revenue_per_sale(&stats)),
            }
            StatCard {
                title: "Sell-through Rate",
                value: format!("{:.1}%", chart::sell_through_rate(&stats)),
                hint: "Tickets sold against tickets added",
            }
        }
        div { class: "grid gap-4 lg:grid-cols-2 mt-4",
            BarChart { title: "Recent Orders", points: chart::orders_trend(&stats.recent_orders), money: true }
            BarChart { title: "Tickets", points: chart::seller_overview(&stats) }
        }
    )
}

#[component]
fn CustomerStatistics(email: String) -> Element {
    let stats = use_query(
        QueryKey::scoped(QueryResource::Statistics, email),
        |api, key| async move { api.get_customer_statistics(key.scope()).await },
    );

    rsx!(
        {match &*stats.read() {
            None => rsx!(Loading {}),
            Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load statistics") }),
            Some(Ok(stats)) => rsx!(CustomerCharts { stats: stats.clone() }),
        }}
    )
}

#[component]
fn CustomerCharts(stats: CustomerStatisticsDto) -> Element {
    let breakdown = chart::status_breakdown(&stats);

    rsx!(
        div { class: "grid gap-4 sm:grid-cols-2 xl:grid-cols-4",
            StatCard { title: "Tickets Bought", value: "{stats.total_tickets_bought}" }
            StatCard { title: "Total Spent", value: format::money(stats.total_spent) }
            StatCard { title: "Total Orders", value: "{stats.total_orders}" }
            StatCard {
                title: "Average per Order",
                value: format::money(stats.average_spent_per_order),
            }
        }
        div { class: "grid gap-4 lg:grid-cols-2 mt-4",
            BarChart { title: "Spending by Route", points: chart::spending_by_route(&stats), money: true }
            BarChart { title: "Recent Orders", points: chart::orders_trend(&stats.recent_orders), money: true }
            if !breakdown.is_empty() {
                BarChart { title: "Orders by Status", points: breakdown }
            }
        }
    )
}

#[component]
pub fn DashboardHome() -> Element {
    let session = use_session();
    let role = session.read().role;
    let email = session.read().email().unwrap_or_default().to_string();

    rsx!(
        Title { "TicketMaster | Dashboard" }
        SectionTitle { title: "Statistics" }
        {match role {
            None => rsx!(Loading {}),
            Some(Role::Admin) => rsx!(AdminStatistics {}),
            Some(Role::Seller) => rsx!(SellerStatistics { email }),
            Some(Role::Customer) => rsx!(CustomerStatistics { email }),
        }}
    )
}

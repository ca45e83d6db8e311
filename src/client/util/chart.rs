//! Chart inputs derived from the statistics aggregates.

use crate::model::statistics::{
    AdminStatisticsDto, CustomerStatisticsDto, RecentOrderDto, SellerStatisticsDto,
};

const ROUTE_LABEL_LIMIT: usize = 20;

/// One labelled value in a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Bar width for each point as a percentage of the largest value in the series.
pub fn bar_percentages(points: &[ChartPoint]) -> Vec<f64> {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    points
        .iter()
        .map(|p| {
            if max > 0.0 {
                (p.value.max(0.0) / max) * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

pub fn orders_trend(recent_orders: &[RecentOrderDto]) -> Vec<ChartPoint> {
    recent_orders
        .iter()
        .enumerate()
        .map(|(index, order)| ChartPoint::new(format!("Order {}", index + 1), order.price))
        .collect()
}

/// Revenue per seller, labelled with the local part of the seller's email.
pub fn revenue_by_seller(stats: &AdminStatisticsDto) -> Vec<ChartPoint> {
    stats
        .revenue_by_seller_array
        .iter()
        .map(|item| {
            let label = item.email.split('@').next().unwrap_or(&item.email);
            ChartPoint::new(label, item.revenue)
        })
        .collect()
}

pub fn admin_overview(stats: &AdminStatisticsDto) -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Total Orders", f64::from(stats.total_orders)),
        ChartPoint::new("Total Tickets", f64::from(stats.total_tickets)),
    ]
}

pub fn average_order_value(stats: &AdminStatisticsDto) -> f64 {
    ratio(stats.total_revenue, f64::from(stats.total_orders))
}

pub fn average_tickets_per_order(stats: &AdminStatisticsDto) -> f64 {
    ratio(f64::from(stats.total_tickets), f64::from(stats.total_orders))
}

pub fn seller_overview(stats: &SellerStatisticsDto) -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Tickets Sold", f64::from(stats.total_tickets_sold)),
        ChartPoint::new("Tickets Added", f64::from(stats.total_tickets_added)),
    ]
}

pub fn average_revenue_per_sale(stats: &SellerStatisticsDto) -> f64 {
    ratio(stats.total_revenue, f64::from(stats.total_tickets_sold))
}

/// Share of listed tickets that were sold, as a percentage.
pub fn sell_through_rate(stats: &SellerStatisticsDto) -> f64 {
    ratio(
        f64::from(stats.total_tickets_sold),
        f64::from(stats.total_tickets_added),
    ) * 100.0
}

pub fn spending_by_route(stats: &CustomerStatisticsDto) -> Vec<ChartPoint> {
    stats
        .spending_by_route_array
        .iter()
        .map(|item| ChartPoint::new(truncate_label(&item.route), item.amount))
        .collect()
}

pub fn status_breakdown(stats: &CustomerStatisticsDto) -> Vec<ChartPoint> {
    let Some(breakdown) = stats.status_breakdown else {
        return Vec::new();
    };

    vec![
        ChartPoint::new("Paid", f64::from(breakdown.paid)),
        ChartPoint::new("Pending", f64::from(breakdown.pending)),
        ChartPoint::new("Approved", f64::from(breakdown.approved)),
        ChartPoint::new("Rejected", f64::from(breakdown.rejected)),
    ]
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() > ROUTE_LABEL_LIMIT {
        let head: String = label.chars().take(ROUTE_LABEL_LIMIT).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

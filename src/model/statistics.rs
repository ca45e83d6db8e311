//! Aggregates precomputed by the backend for the dashboard statistics views.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentOrderDto {
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerRevenueDto {
    pub email: String,
    #[serde(default)]
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSpendingDto {
    pub route: String,
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdownDto {
    #[serde(default)]
    pub paid: u32,
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub approved: u32,
    #[serde(default)]
    pub rejected: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStatisticsDto {
    pub total_revenue: f64,
    pub total_orders: u32,
    pub total_tickets: u32,
    pub total_users: u32,
    pub revenue_by_seller_array: Vec<SellerRevenueDto>,
    pub recent_orders: Vec<RecentOrderDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SellerStatisticsDto {
    pub total_revenue: f64,
    pub total_tickets_sold: u32,
    pub total_tickets_added: u32,
    pub recent_orders: Vec<RecentOrderDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerStatisticsDto {
    pub total_tickets_bought: u32,
    pub total_spent: f64,
    pub total_orders: u32,
    pub average_spent_per_order: f64,
    pub spending_by_route_array: Vec<RouteSpendingDto>,
    pub recent_orders: Vec<RecentOrderDto>,
    pub status_breakdown: Option<StatusBreakdownDto>,
}

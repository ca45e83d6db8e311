use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ticket::{SellerDto, TransportType};

/// Lifecycle state of an order.
///
/// A seller reviews a pending order (`Approved` or `Rejected`), and an approved order becomes
/// `Paid` once the hosted checkout completes. `Rejected` and `Paid` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Paid => "paid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Paid => "Paid",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Paid)
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
                | (Self::Approved, Self::Paid)
        )
    }

    /// Statuses a seller review can move this order to.
    pub fn review_options(&self) -> &'static [OrderStatus] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            _ => &[],
        }
    }

    pub fn is_payable(&self) -> bool {
        matches!(self, Self::Approved)
    }

    pub fn is_cancellable(&self) -> bool {
        !matches!(self, Self::Paid)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order together with the ticket snapshot taken at booking time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub ticket_id: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Purchaser email.
    pub customer: String,
    #[serde(default)]
    pub seller: Option<SellerDto>,
    #[serde(default)]
    pub status: OrderStatus,
    pub name: String,
    pub quantity: u32,
    /// Total price for the whole order.
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub transport_type: Option<TransportType>,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub perks: Vec<String>,
}

impl OrderDto {
    pub fn route(&self) -> Option<String> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Some(format!("{from} → {to}")),
            _ => None,
        }
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderDto {
    pub ticket_id: String,
    pub transaction_id: String,
    pub customer: String,
    pub status: OrderStatus,
    pub seller: SellerDto,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub image: Option<String>,
    pub from: String,
    pub to: String,
    pub transport_type: TransportType,
    pub departure_date: Option<String>,
    pub departure_time: Option<String>,
    pub perks: Vec<String>,
}

/// Body of `PATCH /orders/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusPatchDto {
    pub status: OrderStatus,
}

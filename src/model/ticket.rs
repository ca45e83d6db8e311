use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of tickets that can be featured on the home page at once.
pub const MAX_ADVERTISED: usize = 6;

/// Perks a seller may attach to a ticket.
pub const PERK_OPTIONS: [&str; 6] = ["AC", "Breakfast", "WiFi", "Charging", "Blanket", "Pillow"];

/// Admin review state of a ticket offer.
///
/// Both `Approved` and `Rejected` are terminal, only a pending ticket can be reviewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Whether an admin review may move the ticket from `self` to `next`.
    pub fn can_transition_to(&self, next: TicketStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected)
        )
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportType {
    #[default]
    Bus,
    Train,
    Flight,
    Boat,
}

impl TransportType {
    pub const ALL: [TransportType; 4] = [Self::Bus, Self::Train, Self::Flight, Self::Boat];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Flight => "Flight",
            Self::Boat => "Boat",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|transport| transport.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seller identity embedded in tickets and orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerDto {
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A sellable ticket offer as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub from: String,
    pub to: String,
    pub transport_type: TransportType,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub perks: Vec<String>,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub is_advertised: bool,
    pub seller: SellerDto,
}

impl TicketDto {
    /// Route text shown on cards and tables, e.g. `Dhaka → Sylhet`.
    pub fn route(&self) -> String {
        format!("{} → {}", self.from, self.to)
    }

    pub fn is_sold_out(&self) -> bool {
        self.quantity == 0
    }
}

/// Ticket fields submitted by a seller when listing a new offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicketDto {
    pub name: String,
    pub image: String,
    pub from: String,
    pub to: String,
    pub transport_type: TransportType,
    pub price: f64,
    pub quantity: u32,
    pub departure_date: String,
    pub departure_time: String,
    pub perks: Vec<String>,
    pub seller: SellerDto,
}

/// Partial update body for `PATCH /tickets/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPatchDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_advertised: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_and_advertised_flag_default() {
        let json = r#"{
            "_id": "t1",
            "name": "Dhaka Express",
            "from": "Dhaka",
            "to": "Sylhet",
            "transportType": "Train",
            "price": 50,
            "quantity": 10,
            "seller": { "email": "seller@example.com" }
        }"#;

        let ticket: TicketDto = serde_json::from_str(json).unwrap();

        assert_eq!(ticket.status, TicketStatus::Pending);
        assert!(!ticket.is_advertised);
        assert!(ticket.perks.is_empty());
        assert_eq!(ticket.route(), "Dhaka → Sylhet");
    }

    #[test]
    fn only_pending_tickets_can_be_reviewed() {
        assert!(TicketStatus::Pending.can_transition_to(TicketStatus::Approved));
        assert!(TicketStatus::Pending.can_transition_to(TicketStatus::Rejected));
        assert!(!TicketStatus::Rejected.can_transition_to(TicketStatus::Approved));
        assert!(!TicketStatus::Approved.can_transition_to(TicketStatus::Rejected));
    }

    #[test]
    fn patch_omits_unset_fields() {
        let patch = TicketPatchDto {
            is_advertised: Some(true),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"isAdvertised":true}"#
        );
    }
}

//! Booking form validation and the order snapshot sent to the backend.

use chrono::NaiveDateTime;
use rand::Rng;
use thiserror::Error;

use crate::{
    client::util::countdown,
    model::{
        order::{NewOrderDto, OrderStatus},
        ticket::TicketDto,
    },
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Quantity is required")]
    Required,
    #[error("Quantity must be a whole number")]
    NotANumber,
    #[error("Minimum 1 ticket")]
    BelowMinimum,
    #[error("Maximum {available} tickets")]
    ExceedsAvailable { available: u32 },
}

/// Parse and bound-check the quantity typed into the booking form.
pub fn parse_quantity(input: &str, available: u32) -> Result<u32, QuantityError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(QuantityError::Required);
    }

    let quantity: i64 = input.parse().map_err(|_| QuantityError::NotANumber)?;
    validate_quantity(quantity, available)
}

pub fn validate_quantity(quantity: i64, available: u32) -> Result<u32, QuantityError> {
    if quantity < 1 {
        return Err(QuantityError::BelowMinimum);
    }
    if quantity > i64::from(available) {
        return Err(QuantityError::ExceedsAvailable { available });
    }

    Ok(quantity as u32)
}

/// Client-generated transaction tag, e.g. `booking_1736496000000_9f3a1c`.
pub fn transaction_tag<R: Rng + ?Sized>(unix_millis: i64, rng: &mut R) -> String {
    let suffix: u32 = rng.random_range(0..0x100_0000);
    format!("booking_{unix_millis}_{suffix:06x}")
}

/// Build the order snapshot for `quantity` seats of `ticket`.
///
/// Ticket fields are copied as they are at submission time so later edits to the offer do not
/// change what the customer booked.
pub fn order_snapshot(
    ticket: &TicketDto,
    quantity: u32,
    customer_email: &str,
    transaction_id: String,
) -> NewOrderDto {
    NewOrderDto {
        ticket_id: ticket.id.clone(),
        transaction_id,
        customer: customer_email.to_string(),
        status: OrderStatus::Pending,
        seller: ticket.seller.clone(),
        name: ticket.name.clone(),
        quantity,
        price: ticket.price * f64::from(quantity),
        image: ticket.image.clone(),
        from: ticket.from.clone(),
        to: ticket.to.clone(),
        transport_type: ticket.transport_type,
        departure_date: ticket.departure_date.clone(),
        departure_time: ticket.departure_time.clone(),
        perks: ticket.perks.clone(),
    }
}

/// Whether the "Book Now" button is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAvailability {
    Available,
    SoldOut,
    Departed,
}

impl BookingAvailability {
    pub fn of(ticket: &TicketDto, now: NaiveDateTime) -> Self {
        if countdown::has_departed(
            ticket.departure_date.as_deref(),
            ticket.departure_time.as_deref(),
            now,
        ) {
            Self::Departed
        } else if ticket.is_sold_out() {
            Self::SoldOut
        } else {
            Self::Available
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Why a booking form must not be submitted, `None` when it may.
    pub fn refusal(&self) -> Option<&'static str> {
        match self {
            Self::Available => None,
            Self::SoldOut => Some("This ticket is sold out"),
            Self::Departed => Some("Departure time has passed"),
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Available => "Book Now",
            Self::SoldOut => "Sold Out",
            Self::Departed => "Departure Passed",
        }
    }
}

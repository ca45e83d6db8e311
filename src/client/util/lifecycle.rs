//! Local checks run before a status-changing request is sent, plus the optimistic display
//! state used while that request is in flight.

use thiserror::Error;

use crate::model::{
    order::OrderStatus,
    ticket::{TicketDto, TicketStatus, MAX_ADVERTISED},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Order cannot move from {from} to {to}")]
    Order { from: OrderStatus, to: OrderStatus },
    #[error("Ticket cannot move from {from} to {to}")]
    Ticket { from: TicketStatus, to: TicketStatus },
    #[error("Maximum {max} tickets can be advertised at a time")]
    AdvertiseLimitReached { max: usize },
    #[error("Only approved tickets can be advertised")]
    NotApproved,
    #[error("Paid orders cannot be cancelled")]
    NotCancellable,
}

pub fn review_order(current: OrderStatus, next: OrderStatus) -> Result<OrderStatus, TransitionError> {
    if current.review_options().contains(&next) {
        Ok(next)
    } else {
        Err(TransitionError::Order {
            from: current,
            to: next,
        })
    }
}

pub fn review_ticket(
    current: TicketStatus,
    next: TicketStatus,
) -> Result<TicketStatus, TransitionError> {
    if current.can_transition_to(next) {
        Ok(next)
    } else {
        Err(TransitionError::Ticket {
            from: current,
            to: next,
        })
    }
}

pub fn cancel_order(current: OrderStatus) -> Result<(), TransitionError> {
    if current.is_cancellable() {
        Ok(())
    } else {
        Err(TransitionError::NotCancellable)
    }
}

pub fn advertised_count(tickets: &[TicketDto]) -> usize {
    tickets.iter().filter(|ticket| ticket.is_advertised).count()
}

/// Decide the new advertised flag for `ticket`, or refuse when the featured slots are full.
///
/// Unadvertising is always allowed. Nothing is sent to the backend when this fails.
pub fn toggle_advertised(
    ticket: &TicketDto,
    currently_advertised: usize,
) -> Result<bool, TransitionError> {
    if ticket.is_advertised {
        return Ok(false);
    }
    if ticket.status != TicketStatus::Approved {
        return Err(TransitionError::NotApproved);
    }
    if currently_advertised >= MAX_ADVERTISED {
        return Err(TransitionError::AdvertiseLimitReached {
            max: MAX_ADVERTISED,
        });
    }

    Ok(true)
}

/// Value shown to the user while a change is being confirmed by the backend.
///
/// `begin` displays the requested value immediately, `commit` makes it the confirmed value once
/// the request succeeds and `rollback` restores the last confirmed value when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optimistic<T: Copy + PartialEq> {
    confirmed: T,
    displayed: T,
}

impl<T: Copy + PartialEq> Optimistic<T> {
    pub fn new(value: T) -> Self {
        Self {
            confirmed: value,
            displayed: value,
        }
    }

    pub fn displayed(&self) -> T {
        self.displayed
    }

    pub fn confirmed(&self) -> T {
        self.confirmed
    }

    pub fn is_pending(&self) -> bool {
        self.confirmed != self.displayed
    }

    pub fn begin(&mut self, value: T) {
        self.displayed = value;
    }

    pub fn commit(&mut self) {
        self.confirmed = self.displayed;
    }

    pub fn rollback(&mut self) {
        self.displayed = self.confirmed;
    }

    /// Adopt a freshly fetched value unless a change is still in flight.
    pub fn sync(&mut self, value: T) {
        if !self.is_pending() {
            self.confirmed = value;
            self.displayed = value;
        }
    }
}

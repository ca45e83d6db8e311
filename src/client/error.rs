//! Error types for the TicketMaster web client.
//!
//! Validation errors are raised before any request leaves the browser and are rendered next to
//! the offending field. Remote errors are raised after a failed request and surface as a
//! transient notification. Configuration errors replace the whole application with a blocking
//! message.

use thiserror::Error;

use crate::client::{
    config::ConfigError,
    util::{
        booking::QuantityError, form::FormErrors, lifecycle::TransitionError,
        password::PasswordError, payment::PaymentError,
    },
};

/// Main error type for the web client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Missing or invalid build-time configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Booking quantity failed validation.
    #[error(transparent)]
    Quantity(#[from] QuantityError),
    /// A ticket form failed validation.
    #[error(transparent)]
    Form(#[from] FormErrors),
    /// A password change failed validation.
    #[error(transparent)]
    Password(#[from] PasswordError),
    /// An order cannot be sent to checkout.
    #[error(transparent)]
    Payment(#[from] PaymentError),
    /// A status change was refused locally.
    #[error(transparent)]
    Transition(#[from] TransitionError),
    /// The request could not be sent or no response was received.
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {}", .message.as_deref().unwrap_or("unknown error"))]
    Status { status: u16, message: Option<String> },
    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The identity provider refused the request.
    #[error("{0}")]
    Identity(String),
    /// A credentialed request was attempted without a signed in user.
    #[error("You need to be logged in to do that")]
    Unauthenticated,
}

impl ClientError {
    /// Message to show the user, preferring the server-provided one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Identity(message) => message.clone(),
            Self::Quantity(_)
            | Self::Form(_)
            | Self::Password(_)
            | Self::Payment(_)
            | Self::Transition(_)
            | Self::Unauthenticated => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status of a remote failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_server_message() {
        let err = ClientError::Status {
            status: 400,
            message: Some("Ticket is sold out".to_string()),
        };

        assert_eq!(err.user_message("Booking failed"), "Ticket is sold out");
    }

    #[test]
    fn falls_back_without_server_message() {
        let err = ClientError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Booking failed"), "Booking failed");

        let err = ClientError::Request("connection refused".to_string());
        assert_eq!(err.user_message("Booking failed"), "Booking failed");
    }

    #[test]
    fn validation_errors_are_shown_verbatim() {
        let err = ClientError::from(QuantityError::BelowMinimum);

        assert_eq!(err.user_message("Booking failed"), "Minimum 1 ticket");
    }
}

//! Records exchanged with the marketplace backend.
//!
//! Every type here mirrors a JSON contract owned by the backend. Field names follow the
//! backend's camelCase convention and identifiers use the `_id` key.

pub mod api;
pub mod payment;
pub mod statistics;
pub mod ticket;
pub mod order;
pub mod user;

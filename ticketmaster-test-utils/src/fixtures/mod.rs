//! Fixtures for JSON payloads and mock HTTP endpoints.
//!
//! - `factory` - backend records (tickets, orders, users, statistics) as JSON values
//! - `backend` - marketplace REST endpoints
//! - `identity` - hosted identity provider endpoints

pub mod backend;
pub mod factory;
pub mod identity;

use crate::TestSetup;

impl TestSetup {
    pub fn backend<'a>(&'a mut self) -> BackendFixtures<'a> {
        BackendFixtures { setup: self }
    }

    pub fn identity<'a>(&'a mut self) -> IdentityFixtures<'a> {
        IdentityFixtures { setup: self }
    }
}

pub struct BackendFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

pub struct IdentityFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

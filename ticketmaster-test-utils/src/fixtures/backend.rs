//! Mock endpoints for the marketplace REST API.
//!
//! Every endpoint is registered with the mockito server and verifies it was called the
//! expected number of times.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{fixtures::BackendFixtures, TestSetup};

impl<'a> BackendFixtures<'a> {
    /// Create an anonymous `GET` endpoint returning `body` with status 200.
    ///
    /// # Arguments
    /// - `path` - Request path, may include a query string
    /// - `body` - JSON response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_public_get_endpoint(
        &mut self,
        path: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `GET` endpoint that only answers requests carrying the test bearer token.
    pub fn create_get_endpoint(&mut self, path: &str, body: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .match_header("authorization", TestSetup::bearer().as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create an endpoint that fails with `status` and an `ErrorDto` body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Request path
    /// - `status` - Response status code
    /// - `message` - Value of the `message` field, or `None` for an empty body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        message: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let body = message
            .map(|message| serde_json::json!({ "message": message }).to_string())
            .unwrap_or_default();

        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a credentialed mutation endpoint.
    ///
    /// When `request_body` is given the request must contain it (partial JSON match).
    pub fn create_mutation_endpoint(
        &mut self,
        method: &str,
        path: &str,
        request_body: Option<Value>,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        let body_matcher = match request_body {
            Some(body) => Matcher::PartialJson(body),
            None => Matcher::Any,
        };

        self.setup
            .server
            .mock(method, path)
            .match_header("authorization", TestSetup::bearer().as_str())
            .match_body(body_matcher)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create the latest tickets endpoint, `GET /tickets?limit={limit}`.
    pub fn create_latest_tickets_endpoint(
        &mut self,
        limit: usize,
        tickets: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/tickets")
            .match_query(Matcher::UrlEncoded("limit".into(), limit.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(tickets.to_string())
            .expect(expected_requests)
            .create()
    }
}

//! Mock endpoints for the hosted identity provider.
//!
//! Requests are matched on the `accounts:{action}` path and the test API key.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{
    constant::{TEST_IDENTITY_API_KEY, TEST_USER_ID},
    fixtures::IdentityFixtures,
    TestSetup,
};

impl<'a> IdentityFixtures<'a> {
    fn action(&mut self, action: &str) -> Mock {
        let path = format!("{}/accounts:{}", TestSetup::IDENTITY_PREFIX, action);

        self.setup
            .server
            .mock("POST", path.as_str())
            .match_query(Matcher::UrlEncoded(
                "key".into(),
                TEST_IDENTITY_API_KEY.into(),
            ))
    }

    /// Account payload as returned by sign in, sign up and update.
    pub fn account(email: &str, id_token: Option<&str>) -> Value {
        json!({
            "localId": TEST_USER_ID,
            "email": email,
            "displayName": "Test User",
            "photoUrl": "https://img.example.com/user.png",
            "idToken": id_token
        })
    }

    /// Create a successful `accounts:{action}` endpoint.
    ///
    /// # Arguments
    /// - `action` - Identity action such as `signInWithPassword`
    /// - `request_body` - Partial JSON the request must contain
    /// - `response` - JSON response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_action_endpoint(
        &mut self,
        action: &str,
        request_body: Value,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        self.action(action)
            .match_body(Matcher::PartialJson(request_body))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create an `accounts:{action}` endpoint refusing with an identity error code.
    pub fn create_action_error_endpoint(
        &mut self,
        action: &str,
        code: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "error": { "code": 400, "message": code, "errors": [] }
        });

        self.action(action)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `accounts:lookup` endpoint resolving `id_token` to an account without a token.
    pub fn create_lookup_endpoint(
        &mut self,
        id_token: &str,
        email: &str,
        expected_requests: usize,
    ) -> Mock {
        let response = json!({ "users": [Self::account(email, None)] });

        self.create_action_endpoint(
            "lookup",
            json!({ "idToken": id_token }),
            response,
            expected_requests,
        )
    }
}

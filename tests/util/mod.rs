use std::time::Duration;

use ticketmaster::client::api::{retry::RetryPolicy, ApiClient, IdentityClient};
use ticketmaster_test_utils::{
    constant::{TEST_IDENTITY_API_KEY, TEST_ID_TOKEN},
    TestSetup,
};

/// Client constructors pointed at the mock server.
///
/// Lives in the integration tests so the test utilities do not depend on the client crate.
pub trait TestSetupExt {
    /// Signed in backend client; retries are immediate.
    fn api(&self) -> ApiClient;
    fn anonymous_api(&self) -> ApiClient;
    fn identity_client(&self) -> IdentityClient;
}

impl TestSetupExt for TestSetup {
    fn api(&self) -> ApiClient {
        ApiClient::new(&self.api_url(), Some(TEST_ID_TOKEN))
            .with_retry(RetryPolicy::new(3, Duration::ZERO))
    }

    fn anonymous_api(&self) -> ApiClient {
        ApiClient::new(&self.api_url(), None).with_retry(RetryPolicy::new(3, Duration::ZERO))
    }

    fn identity_client(&self) -> IdentityClient {
        IdentityClient::new(&self.identity_url(), TEST_IDENTITY_API_KEY)
    }
}

//! Placeholder credentials and identities shared by the integration tests.
//!
//! None of these are real credentials.

/// Identity token sent as the bearer credential by signed in test clients.
pub static TEST_ID_TOKEN: &str = "test-id-token";

/// Identity token returned by the mock identity provider after a fresh sign in.
pub static TEST_FRESH_ID_TOKEN: &str = "fresh-id-token";

/// API key appended to every identity provider request.
pub static TEST_IDENTITY_API_KEY: &str = "test-identity-api-key";

pub static TEST_USER_ID: &str = "uid-1";

pub static TEST_CUSTOMER_EMAIL: &str = "customer@example.com";

pub static TEST_SELLER_EMAIL: &str = "seller@example.com";

pub static TEST_ADMIN_EMAIL: &str = "admin@example.com";

pub static TEST_PASSWORD: &str = "secret123";

/// Hosted checkout URL returned by the mock payment endpoint.
pub static TEST_CHECKOUT_URL: &str = "https://checkout.example.com/pay/cs_test_1";

//! Tests for the hosted checkout endpoints of ApiClient.
//!
//! This module verifies the checkout request body derived from an approved order, handling
//! of a session without a redirect URL and confirmation of a completed checkout.

use serde_json::json;
use ticketmaster::{
    client::{error::ClientError, util::payment::checkout_request},
    model::{order::OrderDto, payment::CustomerDto},
};
use ticketmaster_test_utils::prelude::*;

use crate::TestSetupExt;

fn customer() -> CustomerDto {
    CustomerDto {
        name: Some("Customer".to_string()),
        email: TEST_CUSTOMER_EMAIL.to_string(),
        image: None,
    }
}

/// Tests opening a checkout session for an approved order.
///
/// Verifies that the unit price is derived from the stored total and quantity.
///
/// Expected: Ok with the hosted checkout URL
#[tokio::test]
async fn opens_checkout_for_approved_order() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "POST",
        "/create-checkout-session",
        Some(json!({
            "orderId": "o1",
            "price": 50.0,
            "quantity": 3,
            "totalPrice": 150.0,
            "customer": { "email": TEST_CUSTOMER_EMAIL }
        })),
        200,
        json!({ "url": TEST_CHECKOUT_URL }),
        1,
    );
    test.register(mock);

    let order: OrderDto =
        serde_json::from_value(factory::mock_order("o1", "t1", "approved", 3, 150.0))?;
    let request = checkout_request(&order, customer()).map_err(TestError::client)?;
    let session = test
        .api()
        .create_checkout_session(&request)
        .await
        .map_err(TestError::client)?;

    assert_eq!(session.url, TEST_CHECKOUT_URL);
    test.assert_mocks();

    Ok(())
}

/// Tests that a checkout session without a URL is treated as a failure.
///
/// Expected: Err(Parse)
#[tokio::test]
async fn checkout_without_url_fails() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "POST",
        "/create-checkout-session",
        None,
        200,
        json!({ "url": "" }),
        1,
    );
    test.register(mock);

    let order: OrderDto =
        serde_json::from_value(factory::mock_order("o1", "t1", "approved", 1, 20.0))?;
    let request = checkout_request(&order, customer()).map_err(TestError::client)?;
    let result = test.api().create_checkout_session(&request).await;

    assert!(matches!(result, Err(ClientError::Parse(_))));
    assert_eq!(
        result
            .expect_err("checkout should fail")
            .user_message("Failed to process payment"),
        "Failed to process payment"
    );
    test.assert_mocks();

    Ok(())
}

/// Tests confirming a completed checkout session.
///
/// Expected: Ok with the transaction id from the receipt
#[tokio::test]
async fn confirms_payment() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "POST",
        "/payment-success",
        Some(json!({ "sessionId": "cs_test_1" })),
        200,
        json!({ "transactionId": "pi_123", "orderId": "o1" }),
        1,
    );
    test.register(mock);

    let receipt = test
        .api()
        .confirm_payment("cs_test_1")
        .await
        .map_err(TestError::client)?;

    assert_eq!(receipt.transaction_id.as_deref(), Some("pi_123"));
    assert_eq!(receipt.order_id.as_deref(), Some("o1"));
    test.assert_mocks();

    Ok(())
}

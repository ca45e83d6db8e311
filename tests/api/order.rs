//! Tests for the order endpoints of ApiClient.
//!
//! This module verifies booking submission with the ticket snapshot, the customer and seller
//! order lists, seller review status changes and server-provided error messages.

use serde_json::json;
use ticketmaster::{
    client::util::booking::order_snapshot,
    model::{
        order::OrderStatus,
        ticket::TicketDto,
    },
};
use ticketmaster_test_utils::prelude::*;

use crate::TestSetupExt;

fn ticket(id: &str, price: f64, quantity: u32) -> Result<TicketDto, TestError> {
    Ok(serde_json::from_value(factory::mock_ticket(id, price, quantity))?)
}

/// Tests submitting a booking for two seats.
///
/// Verifies that the order snapshot carries the total price, the pending status and the
/// purchaser email.
///
/// Expected: Ok with the inserted order id
#[tokio::test]
async fn submits_booking_snapshot() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "POST",
        "/orders",
        Some(json!({
            "ticketId": "t1",
            "customer": TEST_CUSTOMER_EMAIL,
            "status": "pending",
            "quantity": 2,
            "price": 100.0
        })),
        201,
        json!({ "acknowledged": true, "insertedId": "o1" }),
        1,
    );
    test.register(mock);

    let order = order_snapshot(
        &ticket("t1", 50.0, 10)?,
        2,
        TEST_CUSTOMER_EMAIL,
        "booking_1700000000000_abc123".to_string(),
    );
    let result = test
        .api()
        .create_order(&order)
        .await
        .map_err(TestError::client)?;

    assert_eq!(result.inserted_id.as_deref(), Some("o1"));
    test.assert_mocks();

    Ok(())
}

/// Tests that a refused booking keeps the server message.
///
/// Expected: Err whose user message is the server's text
#[tokio::test]
async fn refused_booking_shows_server_message() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .backend()
        .create_error_endpoint("POST", "/orders", 400, Some("Ticket is sold out"), 1);
    test.register(mock);

    let order = order_snapshot(
        &ticket("t1", 50.0, 1)?,
        1,
        TEST_CUSTOMER_EMAIL,
        "booking_1700000000000_abc123".to_string(),
    );
    let result = test.api().create_order(&order).await;

    let error = result.expect_err("booking should be refused");
    assert_eq!(error.user_message("Booking failed"), "Ticket is sold out");
    test.assert_mocks();

    Ok(())
}

/// Tests that a mutation without a server message falls back to the generic text.
///
/// Mutations are sent once even when the backend fails with a server error.
///
/// Expected: Err with the fallback message after one request
#[tokio::test]
async fn failed_booking_is_not_retried() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .backend()
        .create_error_endpoint("POST", "/orders", 500, None, 1);
    test.register(mock);

    let order = order_snapshot(
        &ticket("t1", 50.0, 1)?,
        1,
        TEST_CUSTOMER_EMAIL,
        "booking_1700000000000_abc123".to_string(),
    );
    let error = test
        .api()
        .create_order(&order)
        .await
        .expect_err("booking should fail");

    assert_eq!(error.user_message("Booking failed"), "Booking failed");
    test.assert_mocks();

    Ok(())
}

/// Tests decoding the customer's bookings.
///
/// Expected: Ok with statuses and computed route
#[tokio::test]
async fn fetches_customer_orders() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_get_endpoint(
        "/my-orders",
        json!([
            factory::mock_order("o1", "t1", "approved", 2, 100.0),
            factory::mock_order("o2", "t2", "paid", 1, 40.0)
        ]),
        1,
    );
    test.register(mock);

    let orders = test.api().get_my_orders().await.map_err(TestError::client)?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].status, OrderStatus::Approved);
    assert!(orders[0].status.is_payable());
    assert_eq!(orders[1].status, OrderStatus::Paid);
    assert!(!orders[1].status.is_cancellable());
    assert_eq!(orders[0].route().as_deref(), Some("Dhaka → Sylhet"));
    test.assert_mocks();

    Ok(())
}

/// Tests a seller approving a pending order.
///
/// Expected: Ok with the status sent as its lowercase wire name
#[tokio::test]
async fn seller_approves_order() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "PATCH",
        "/orders/o1",
        Some(json!({ "status": "approved" })),
        200,
        factory::mock_ack(),
        1,
    );
    test.register(mock);

    let result = test
        .api()
        .update_order_status("o1", OrderStatus::Approved)
        .await
        .map_err(TestError::client)?;

    assert!(result.acknowledged);
    test.assert_mocks();

    Ok(())
}

/// Tests cancelling a booking with an empty acknowledgement body.
///
/// Expected: Ok with a default acknowledgement
#[tokio::test]
async fn cancels_order_with_empty_body() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .backend()
        .create_mutation_endpoint("DELETE", "/orders/o1", None, 200, json!(null), 1);
    test.register(mock);

    let result = test
        .api()
        .cancel_order("o1")
        .await
        .map_err(TestError::client)?;

    assert!(!result.acknowledged);
    test.assert_mocks();

    Ok(())
}

//! Tests for the retry behaviour of ApiClient queries.
//!
//! This module verifies that server errors on queries are retried up to the policy limit,
//! that client errors fail on the first attempt and that mutations are never repeated.

use ticketmaster::{client::error::ClientError, model::order::OrderStatus};
use ticketmaster_test_utils::prelude::*;

use crate::TestSetupExt;

/// Tests that a query failing with a server error is attempted three times.
///
/// Expected: Err(Status 503) after three requests
#[tokio::test]
async fn server_errors_are_retried_until_exhausted() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .backend()
        .create_error_endpoint("GET", "/my-orders", 503, None, 3);
    test.register(mock);

    let result = test.api().get_my_orders().await;

    assert_eq!(result.map_err(|e| e.status()), Err(Some(503)));
    test.assert_mocks();

    Ok(())
}

/// Tests that a client error fails without a retry.
///
/// Expected: Err(Status 403) after one request
#[tokio::test]
async fn client_errors_fail_immediately() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .backend()
        .create_error_endpoint("GET", "/admin-statistics", 403, Some("Forbidden"), 1);
    test.register(mock);

    let result = test.api().get_admin_statistics().await;

    assert_eq!(
        result,
        Err(ClientError::Status {
            status: 403,
            message: Some("Forbidden".to_string()),
        })
    );
    test.assert_mocks();

    Ok(())
}

/// Tests that a failing mutation is sent exactly once.
///
/// Expected: Err(Status 500) after one request
#[tokio::test]
async fn mutations_are_not_retried() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .backend()
        .create_error_endpoint("PATCH", "/orders/o1", 500, None, 1);
    test.register(mock);

    let result = test
        .api()
        .update_order_status("o1", OrderStatus::Rejected)
        .await;

    assert_eq!(result.map(|_| ()).map_err(|e| e.status()), Err(Some(500)));
    test.assert_mocks();

    Ok(())
}

//! Tests for the user, role and seller request endpoints of ApiClient.
//!
//! This module verifies profile sync after sign in, role lookup, admin role changes addressed
//! by encoded email and the seller request workflow.

use serde_json::json;
use ticketmaster::model::user::{Role, SaveUserDto, SellerRequestStatus};
use ticketmaster_test_utils::prelude::*;

use crate::TestSetupExt;

/// Tests syncing the signed in user's profile.
///
/// Expected: Ok with the profile fields in the body
#[tokio::test]
async fn saves_user_profile() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "POST",
        "/user",
        Some(json!({ "email": TEST_CUSTOMER_EMAIL, "name": "Customer" })),
        200,
        factory::mock_ack(),
        1,
    );
    test.register(mock);

    let profile = SaveUserDto {
        email: TEST_CUSTOMER_EMAIL.to_string(),
        name: Some("Customer".to_string()),
        image: None,
    };
    let result = test
        .api()
        .save_user(&profile)
        .await
        .map_err(TestError::client)?;

    assert!(result.acknowledged);
    test.assert_mocks();

    Ok(())
}

/// Tests loading the signed in user's role.
///
/// Expected: Ok(Role::Seller)
#[tokio::test]
async fn fetches_role() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .backend()
        .create_get_endpoint("/user/role", json!({ "role": "seller" }), 1);
    test.register(mock);

    let role = test.api().get_role().await.map_err(TestError::client)?;

    assert_eq!(role, Role::Seller);
    test.assert_mocks();

    Ok(())
}

/// Tests that a user without a stored role surfaces the 404 to the caller.
///
/// Expected: Err with status 404 after one request
#[tokio::test]
async fn missing_role_is_a_not_found() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .backend()
        .create_error_endpoint("GET", "/user/role", 404, Some("User not found"), 1);
    test.register(mock);

    let result = test.api().get_role().await;

    assert_eq!(result.map_err(|e| e.status()), Err(Some(404)));
    test.assert_mocks();

    Ok(())
}

/// Tests listing every user for the admin table.
///
/// Expected: Ok with users missing a seller request defaulting to none
#[tokio::test]
async fn fetches_users() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_get_endpoint(
        "/users",
        json!([
            factory::mock_user(TEST_ADMIN_EMAIL, "admin"),
            factory::mock_user(TEST_CUSTOMER_EMAIL, "customer")
        ]),
        1,
    );
    test.register(mock);

    let users = test.api().get_users().await.map_err(TestError::client)?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].role, Role::Admin);
    assert_eq!(users[1].name.as_deref(), Some("customer"));
    assert_eq!(users[1].seller_request, SellerRequestStatus::None);
    test.assert_mocks();

    Ok(())
}

/// Tests an admin promoting a customer to seller.
///
/// Expected: Ok with the role sent to the email-addressed endpoint
#[tokio::test]
async fn updates_user_role() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "PATCH",
        "/users/customer%40example.com/role",
        Some(json!({ "role": "seller" })),
        200,
        factory::mock_ack(),
        1,
    );
    test.register(mock);

    let result = test
        .api()
        .update_user_role(TEST_CUSTOMER_EMAIL, Role::Seller)
        .await
        .map_err(TestError::client)?;

    assert_eq!(result.modified_count, Some(1));
    test.assert_mocks();

    Ok(())
}

/// Tests a customer asking to become a seller.
///
/// Expected: Ok after one request
#[tokio::test]
async fn requests_seller_role() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "POST",
        "/seller-requests",
        None,
        201,
        json!({ "acknowledged": true }),
        1,
    );
    test.register(mock);

    let result = test
        .api()
        .request_seller()
        .await
        .map_err(TestError::client)?;

    assert!(result.acknowledged);
    test.assert_mocks();

    Ok(())
}

/// Tests the admin list of pending seller requests.
///
/// Expected: Ok with the pending request
#[tokio::test]
async fn fetches_seller_requests() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_get_endpoint(
        "/seller-requests",
        json!([factory::mock_seller_request(TEST_CUSTOMER_EMAIL)]),
        1,
    );
    test.register(mock);

    let requests = test
        .api()
        .get_seller_requests()
        .await
        .map_err(TestError::client)?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].seller_request, SellerRequestStatus::Pending);
    test.assert_mocks();

    Ok(())
}

/// Tests an admin approving a seller request.
///
/// Expected: Ok with the status sent to the email-addressed endpoint
#[tokio::test]
async fn approves_seller_request() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "PATCH",
        "/seller-requests/customer%40example.com",
        Some(json!({ "status": "approved" })),
        200,
        factory::mock_ack(),
        1,
    );
    test.register(mock);

    let result = test
        .api()
        .review_seller_request(TEST_CUSTOMER_EMAIL, SellerRequestStatus::Approved)
        .await
        .map_err(TestError::client)?;

    assert!(result.acknowledged);
    test.assert_mocks();

    Ok(())
}

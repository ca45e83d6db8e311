//! Tests for IdentityClient against a mock identity provider.
//!
//! This module verifies password sign in and sign up, translation of provider error codes,
//! password changes with re-authentication and restoring a session from a stored token.

use serde_json::json;
use ticketmaster::client::{error::ClientError, store::session::SessionUser};
use ticketmaster_test_utils::prelude::*;

use crate::TestSetupExt;

fn account(email: &str, id_token: Option<&str>) -> serde_json::Value {
    ticketmaster_test_utils::fixtures::IdentityFixtures::account(email, id_token)
}

fn session_user() -> SessionUser {
    SessionUser {
        uid: TEST_USER_ID.to_string(),
        email: TEST_CUSTOMER_EMAIL.to_string(),
        display_name: Some("Test User".to_string()),
        photo_url: None,
        id_token: TEST_ID_TOKEN.to_string(),
    }
}

/// Tests signing in with email and password.
///
/// Expected: Ok with the provider's token and profile
#[tokio::test]
async fn signs_in_with_password() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.identity().create_action_endpoint(
        "signInWithPassword",
        json!({
            "email": TEST_CUSTOMER_EMAIL,
            "password": TEST_PASSWORD,
            "returnSecureToken": true
        }),
        account(TEST_CUSTOMER_EMAIL, Some(TEST_FRESH_ID_TOKEN)),
        1,
    );
    test.register(mock);

    let user = test
        .identity_client()
        .sign_in(TEST_CUSTOMER_EMAIL, TEST_PASSWORD)
        .await
        .map_err(TestError::client)?;

    assert_eq!(user.uid, TEST_USER_ID);
    assert_eq!(user.id_token, TEST_FRESH_ID_TOKEN);
    assert_eq!(user.display_name.as_deref(), Some("Test User"));
    test.assert_mocks();

    Ok(())
}

/// Tests that an unknown email is reported without revealing which field was wrong.
///
/// Expected: Err(Identity("Invalid email or password"))
#[tokio::test]
async fn unknown_email_is_invalid_credentials() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .identity()
        .create_action_error_endpoint("signInWithPassword", "EMAIL_NOT_FOUND", 1);
    test.register(mock);

    let result = test
        .identity_client()
        .sign_in(TEST_CUSTOMER_EMAIL, TEST_PASSWORD)
        .await;

    assert_eq!(
        result,
        Err(ClientError::Identity("Invalid email or password".to_string()))
    );
    test.assert_mocks();

    Ok(())
}

/// Tests creating an account and attaching the display name to it.
///
/// Verifies that the profile update is sent with the token returned by sign up.
///
/// Expected: Ok with the new account's token
#[tokio::test]
async fn signs_up_and_sets_profile() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let sign_up = test.identity().create_action_endpoint(
        "signUp",
        json!({ "email": TEST_CUSTOMER_EMAIL, "password": TEST_PASSWORD }),
        account(TEST_CUSTOMER_EMAIL, Some(TEST_ID_TOKEN)),
        1,
    );
    let update = test.identity().create_action_endpoint(
        "update",
        json!({ "idToken": TEST_ID_TOKEN, "displayName": "Test User" }),
        account(TEST_CUSTOMER_EMAIL, Some(TEST_FRESH_ID_TOKEN)),
        1,
    );
    test.register(sign_up);
    test.register(update);

    let user = test
        .identity_client()
        .sign_up(TEST_CUSTOMER_EMAIL, TEST_PASSWORD, "Test User", None)
        .await
        .map_err(TestError::client)?;

    assert_eq!(user.email, TEST_CUSTOMER_EMAIL);
    assert_eq!(user.id_token, TEST_FRESH_ID_TOKEN);
    test.assert_mocks();

    Ok(())
}

/// Tests that an existing account is reported with a friendly message.
///
/// Expected: Err(Identity) and no profile update
#[tokio::test]
async fn duplicate_sign_up_is_refused() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .identity()
        .create_action_error_endpoint("signUp", "EMAIL_EXISTS", 1);
    test.register(mock);

    let result = test
        .identity_client()
        .sign_up(TEST_CUSTOMER_EMAIL, TEST_PASSWORD, "Test User", None)
        .await;

    assert_eq!(
        result,
        Err(ClientError::Identity(
            "An account with this email already exists".to_string()
        ))
    );
    test.assert_mocks();

    Ok(())
}

/// Tests that a wrong current password stops a password change.
///
/// Expected: Err(Identity("Current password is incorrect")) without an update request
#[tokio::test]
async fn wrong_current_password_is_rejected() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .identity()
        .create_action_error_endpoint("signInWithPassword", "INVALID_PASSWORD", 1);
    test.register(mock);

    let result = test
        .identity_client()
        .change_password(&session_user(), "wrong-password", "new-secret")
        .await;

    assert_eq!(
        result,
        Err(ClientError::Identity(
            "Current password is incorrect".to_string()
        ))
    );
    test.assert_mocks();

    Ok(())
}

/// Tests a password change with re-authentication.
///
/// Expected: Ok with the token issued by the update
#[tokio::test]
async fn changes_password() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let sign_in = test.identity().create_action_endpoint(
        "signInWithPassword",
        json!({ "email": TEST_CUSTOMER_EMAIL, "password": TEST_PASSWORD }),
        account(TEST_CUSTOMER_EMAIL, Some(TEST_FRESH_ID_TOKEN)),
        1,
    );
    let update = test.identity().create_action_endpoint(
        "update",
        json!({ "idToken": TEST_FRESH_ID_TOKEN, "password": "new-secret" }),
        account(TEST_CUSTOMER_EMAIL, None),
        1,
    );
    test.register(sign_in);
    test.register(update);

    let user = test
        .identity_client()
        .change_password(&session_user(), TEST_PASSWORD, "new-secret")
        .await
        .map_err(TestError::client)?;

    assert_eq!(user.id_token, TEST_FRESH_ID_TOKEN);
    test.assert_mocks();

    Ok(())
}

/// Tests restoring a session from a stored token.
///
/// Expected: Ok(Some) keeping the stored token
#[tokio::test]
async fn lookup_restores_session() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .identity()
        .create_lookup_endpoint(TEST_ID_TOKEN, TEST_CUSTOMER_EMAIL, 1);
    test.register(mock);

    let user = test
        .identity_client()
        .lookup(TEST_ID_TOKEN)
        .await
        .map_err(TestError::client)?;

    let user = user.ok_or_else(|| TestError::client("session was not restored"))?;
    assert_eq!(user.email, TEST_CUSTOMER_EMAIL);
    assert_eq!(user.id_token, TEST_ID_TOKEN);
    test.assert_mocks();

    Ok(())
}

/// Tests that an expired stored token yields no session rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn expired_token_yields_no_session() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .identity()
        .create_action_error_endpoint("lookup", "INVALID_ID_TOKEN", 1);
    test.register(mock);

    let result = test.identity_client().lookup("expired-token").await;

    assert_eq!(result, Ok(None));
    test.assert_mocks();

    Ok(())
}

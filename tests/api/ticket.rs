//! Tests for the ticket endpoints of ApiClient.
//!
//! This module verifies ticket queries against the mock backend, including the anonymous
//! home page queries, the empty-list handling of 404 responses, bearer token forwarding for
//! credentialed queries and the body of ticket mutations.

use serde_json::json;
use ticketmaster::{
    client::{api::ticket::LATEST_LIMIT, error::ClientError},
    model::ticket::{TicketPatchDto, TicketStatus, TransportType},
};
use ticketmaster_test_utils::prelude::*;

use crate::TestSetupExt;

/// Tests fetching the latest tickets for the home page.
///
/// Verifies that the query asks for the configured limit and decodes every ticket.
///
/// Expected: Ok with both tickets in backend order
#[tokio::test]
async fn fetches_latest_tickets_with_limit() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let tickets = json!([
        factory::mock_ticket("t1", 50.0, 10),
        factory::mock_ticket("t2", 20.0, 4)
    ]);
    let mock = test
        .backend()
        .create_latest_tickets_endpoint(LATEST_LIMIT, tickets, 1);
    test.register(mock);

    let result = test.anonymous_api().get_latest_tickets().await;

    let tickets = result.map_err(TestError::client)?;
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].id, "t1");
    assert_eq!(tickets[0].transport_type, TransportType::Train);
    assert_eq!(tickets[1].price, 20.0);
    test.assert_mocks();

    Ok(())
}

/// Tests that a 404 on a list endpoint means there is nothing to show.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn missing_advertised_tickets_is_an_empty_list() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .backend()
        .create_error_endpoint("GET", "/advertised-tickets", 404, Some("Not found"), 1);
    test.register(mock);

    let tickets = test
        .anonymous_api()
        .get_advertised_tickets()
        .await
        .map_err(TestError::client)?;

    assert!(tickets.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests fetching a single ticket by id.
///
/// Expected: Ok with the decoded ticket
#[tokio::test]
async fn fetches_ticket_details() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_public_get_endpoint(
        "/tickets/t1",
        factory::mock_ticket("t1", 75.5, 3),
        1,
    );
    test.register(mock);

    let ticket = test
        .anonymous_api()
        .get_ticket("t1")
        .await
        .map_err(TestError::client)?;

    assert_eq!(ticket.name, "Express t1");
    assert_eq!(ticket.status, TicketStatus::Approved);
    assert_eq!(ticket.perks, vec!["AC".to_string(), "WiFi".to_string()]);
    test.assert_mocks();

    Ok(())
}

/// Tests that a ticket id taken from the route is sent as a single path segment.
///
/// Expected: Ok after one request to the encoded path
#[tokio::test]
async fn ticket_id_is_percent_encoded() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_public_get_endpoint(
        "/tickets/a%2Fb",
        factory::mock_ticket("a/b", 10.0, 1),
        1,
    );
    test.register(mock);

    let ticket = test
        .anonymous_api()
        .get_ticket("a/b")
        .await
        .map_err(TestError::client)?;

    assert_eq!(ticket.id, "a/b");
    test.assert_mocks();

    Ok(())
}

/// Tests that a missing ticket surfaces the server message without retrying.
///
/// Expected: Err(Status 404) after a single request
#[tokio::test]
async fn missing_ticket_is_not_retried() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .backend()
        .create_error_endpoint("GET", "/tickets/missing", 404, Some("Ticket not found"), 1);
    test.register(mock);

    let result = test.anonymous_api().get_ticket("missing").await;

    assert_eq!(
        result,
        Err(ClientError::Status {
            status: 404,
            message: Some("Ticket not found".to_string()),
        })
    );
    test.assert_mocks();

    Ok(())
}

/// Tests that the seller inventory is fetched with the bearer token.
///
/// Expected: Ok with the seller's tickets
#[tokio::test]
async fn inventory_sends_bearer_token() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_get_endpoint(
        "/my-inventory",
        json!([factory::mock_ticket("t1", 10.0, 1)]),
        1,
    );
    test.register(mock);

    let tickets = test.api().get_inventory().await.map_err(TestError::client)?;

    assert_eq!(tickets.len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Tests that credentialed queries are refused locally without a session.
///
/// Expected: Err(Unauthenticated) and no request sent
#[tokio::test]
async fn inventory_requires_session() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_get_endpoint("/my-inventory", json!([]), 0);
    test.register(mock);

    let result = test.anonymous_api().get_inventory().await;

    assert_eq!(result, Err(ClientError::Unauthenticated));
    test.assert_mocks();

    Ok(())
}

/// Tests that an advertisement toggle only sends the changed flag.
///
/// Expected: Ok with the mutation acknowledged
#[tokio::test]
async fn advertise_patch_sends_only_flag() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "PATCH",
        "/tickets/t1",
        Some(json!({ "isAdvertised": true })),
        200,
        factory::mock_ack(),
        1,
    );
    test.register(mock);

    let patch = TicketPatchDto {
        is_advertised: Some(true),
        ..Default::default()
    };
    let result = test
        .api()
        .update_ticket("t1", &patch)
        .await
        .map_err(TestError::client)?;

    assert!(result.acknowledged);
    test.assert_mocks();

    Ok(())
}

/// Tests deleting a ticket from the seller inventory.
///
/// Expected: Ok once the backend acknowledges
#[tokio::test]
async fn deletes_ticket() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_mutation_endpoint(
        "DELETE",
        "/tickets/t1",
        None,
        200,
        json!({ "acknowledged": true, "deletedCount": 1 }),
        1,
    );
    test.register(mock);

    let result = test
        .api()
        .delete_ticket("t1")
        .await
        .map_err(TestError::client)?;

    assert_eq!(result.deleted_count, Some(1));
    test.assert_mocks();

    Ok(())
}

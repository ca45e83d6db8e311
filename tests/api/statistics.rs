//! Tests for the dashboard statistics endpoints of ApiClient.

use ticketmaster::client::util::chart;
use ticketmaster_test_utils::prelude::*;

use crate::TestSetupExt;

/// Tests fetching the platform-wide statistics shown to admins.
///
/// Expected: Ok with totals and per-seller revenue
#[tokio::test]
async fn fetches_admin_statistics() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_get_endpoint(
        "/admin-statistics",
        factory::mock_admin_statistics(),
        1,
    );
    test.register(mock);

    let stats = test
        .api()
        .get_admin_statistics()
        .await
        .map_err(TestError::client)?;

    assert_eq!(stats.total_revenue, 1500.0);
    assert_eq!(stats.total_users, 40);
    assert_eq!(stats.revenue_by_seller_array.len(), 2);
    assert_eq!(stats.recent_orders[0].quantity, 2);
    assert_eq!(chart::average_order_value(&stats), 150.0);
    test.assert_mocks();

    Ok(())
}

/// Tests that seller statistics are scoped by the encoded seller email.
///
/// Expected: Ok with the seller totals
#[tokio::test]
async fn fetches_seller_statistics_by_email() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_get_endpoint(
        "/seller-statistics/seller%40example.com",
        factory::mock_seller_statistics(),
        1,
    );
    test.register(mock);

    let stats = test
        .api()
        .get_seller_statistics(TEST_SELLER_EMAIL)
        .await
        .map_err(TestError::client)?;

    assert_eq!(stats.total_tickets_sold, 12);
    assert_eq!(stats.total_tickets_added, 48);
    assert_eq!(chart::sell_through_rate(&stats), 25.0);
    assert_eq!(chart::average_revenue_per_sale(&stats), 50.0);
    test.assert_mocks();

    Ok(())
}

/// Tests customer statistics, including the optional status breakdown.
///
/// Expected: Ok with route spending and the breakdown present
#[tokio::test]
async fn fetches_customer_statistics_by_email() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.backend().create_get_endpoint(
        "/customer-statistics/customer%40example.com",
        factory::mock_customer_statistics(),
        1,
    );
    test.register(mock);

    let stats = test
        .api()
        .get_customer_statistics(TEST_CUSTOMER_EMAIL)
        .await
        .map_err(TestError::client)?;

    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.spending_by_route_array[0].route, "Dhaka → Sylhet");
    assert!(stats.recent_orders.is_empty());
    assert_eq!(stats.status_breakdown.map(|b| b.paid), Some(1));
    test.assert_mocks();

    Ok(())
}

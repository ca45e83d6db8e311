use chrono::{Duration, Local};
use serde_json::{json, Value};

use crate::constant::{TEST_CUSTOMER_EMAIL, TEST_SELLER_EMAIL};

/// Departure date `days` from today as `YYYY-MM-DD`; negative values are in the past.
pub fn departure_date(days: i64) -> String {
    (Local::now() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub fn mock_seller() -> Value {
    json!({
        "name": "Seller",
        "email": TEST_SELLER_EMAIL,
        "image": "https://img.example.com/seller.png"
    })
}

/// Create an approved, unadvertised ticket departing in three days.
///
/// # Arguments
/// - `id` - Value for the `_id` field
/// - `price` - Unit price
/// - `quantity` - Seats left
pub fn mock_ticket(id: &str, price: f64, quantity: u32) -> Value {
    json!({
        "_id": id,
        "name": format!("Express {id}"),
        "image": format!("https://img.example.com/{id}.png"),
        "from": "Dhaka",
        "to": "Sylhet",
        "transportType": "Train",
        "price": price,
        "quantity": quantity,
        "departureDate": departure_date(3),
        "departureTime": "08:30",
        "perks": ["AC", "WiFi"],
        "status": "approved",
        "isAdvertised": false,
        "seller": mock_seller()
    })
}

/// Create an order for `mock_ticket(ticket_id, ..)` with the given lifecycle status.
pub fn mock_order(id: &str, ticket_id: &str, status: &str, quantity: u32, price: f64) -> Value {
    json!({
        "_id": id,
        "ticketId": ticket_id,
        "transactionId": format!("booking_1700000000000_{id}"),
        "customer": TEST_CUSTOMER_EMAIL,
        "seller": mock_seller(),
        "status": status,
        "name": format!("Express {ticket_id}"),
        "quantity": quantity,
        "price": price,
        "image": format!("https://img.example.com/{ticket_id}.png"),
        "from": "Dhaka",
        "to": "Sylhet",
        "transportType": "Train",
        "departureDate": departure_date(3),
        "departureTime": "08:30",
        "perks": ["AC"]
    })
}

pub fn mock_user(email: &str, role: &str) -> Value {
    json!({
        "email": email,
        "name": email.split('@').next().unwrap_or(email),
        "image": null,
        "role": role
    })
}

/// Create a customer with a pending seller request.
pub fn mock_seller_request(email: &str) -> Value {
    json!({
        "email": email,
        "name": "Applicant",
        "role": "customer",
        "sellerRequest": "pending"
    })
}

pub fn mock_admin_statistics() -> Value {
    json!({
        "totalRevenue": 1500.0,
        "totalOrders": 10,
        "totalTickets": 25,
        "totalUsers": 40,
        "revenueBySellerArray": [
            { "email": "first@example.com", "revenue": 1000.0 },
            { "email": "second@example.com", "revenue": 500.0 }
        ],
        "recentOrders": [
            { "price": 100.0, "quantity": 2 },
            { "price": 50.0, "quantity": 1 }
        ]
    })
}

pub fn mock_seller_statistics() -> Value {
    json!({
        "totalRevenue": 600.0,
        "totalTicketsSold": 12,
        "totalTicketsAdded": 48,
        "recentOrders": [{ "price": 50.0, "quantity": 1 }]
    })
}

pub fn mock_customer_statistics() -> Value {
    json!({
        "totalTicketsBought": 5,
        "totalSpent": 250.0,
        "totalOrders": 3,
        "averageSpentPerOrder": 83.33,
        "spendingByRouteArray": [
            { "route": "Dhaka → Sylhet", "amount": 150.0 }
        ],
        "recentOrders": [],
        "statusBreakdown": { "paid": 1, "pending": 1, "approved": 1, "rejected": 0 }
    })
}

/// Acknowledgement returned by every mutation endpoint.
pub fn mock_ack() -> Value {
    json!({ "acknowledged": true, "modifiedCount": 1 })
}

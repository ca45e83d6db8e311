use serde::{Deserialize, Serialize};

/// Purchaser identity forwarded to the checkout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
}

/// Body of `POST /create-checkout-session`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequestDto {
    pub order_id: String,
    pub ticket_name: String,
    /// Price per ticket.
    pub price: f64,
    pub quantity: u32,
    pub total_price: f64,
    pub image: Option<String>,
    pub customer: CustomerDto,
}

/// Hosted checkout session; the browser is sent to `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionDto {
    pub url: String,
}

/// Body of `POST /payment-success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmationDto {
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentReceiptDto {
    pub transaction_id: Option<String>,
    pub order_id: Option<String>,
}

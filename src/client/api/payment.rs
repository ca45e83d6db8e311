use dioxus_logger::tracing;

use crate::{
    client::{
        api::{transport::Method, ApiClient},
        error::ClientError,
    },
    model::payment::{
        CheckoutRequestDto, CheckoutSessionDto, PaymentConfirmationDto, PaymentReceiptDto,
    },
};

impl ApiClient {
    /// Open a hosted checkout session; the caller redirects the browser to its `url`.
    pub async fn create_checkout_session(
        &self,
        request: &CheckoutRequestDto,
    ) -> Result<CheckoutSessionDto, ClientError> {
        tracing::info!("Creating checkout session for order {}", request.order_id);

        let session: CheckoutSessionDto = self
            .send(Method::Post, "/create-checkout-session", Some(request))
            .await?;
        if session.url.trim().is_empty() {
            return Err(ClientError::Parse(
                "checkout session has no redirect url".to_string(),
            ));
        }

        Ok(session)
    }

    /// Report a completed checkout back to the backend, which marks the order paid.
    pub async fn confirm_payment(&self, session_id: &str) -> Result<PaymentReceiptDto, ClientError> {
        let receipt: Option<PaymentReceiptDto> = self
            .send(
                Method::Post,
                "/payment-success",
                Some(&PaymentConfirmationDto {
                    session_id: session_id.to_string(),
                }),
            )
            .await?;

        Ok(receipt.unwrap_or_default())
    }
}

use thiserror::Error;

use crate::model::{
    order::OrderDto,
    payment::{CheckoutRequestDto, CustomerDto},
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Order has no tickets to pay for")]
    EmptyOrder,
    #[error("Only approved orders can be paid")]
    NotPayable,
}

/// Build the checkout body for `order`, deriving the unit price from the stored total.
pub fn checkout_request(
    order: &OrderDto,
    customer: CustomerDto,
) -> Result<CheckoutRequestDto, PaymentError> {
    if order.quantity == 0 {
        return Err(PaymentError::EmptyOrder);
    }
    if !order.status.is_payable() {
        return Err(PaymentError::NotPayable);
    }

    Ok(CheckoutRequestDto {
        order_id: order.id.clone(),
        ticket_name: order.name.clone(),
        price: order.price / f64::from(order.quantity),
        quantity: order.quantity,
        total_price: order.price,
        image: order.image.clone(),
        customer,
    })
}

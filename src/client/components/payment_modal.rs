use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        browser,
        components::Modal,
        store::{toast::notify_error, use_api, use_session, use_toasts},
        util::{format, payment::checkout_request},
    },
    model::order::OrderDto,
};

/// Summary of an approved order with a button that hands off to the hosted checkout.
#[component]
pub fn PaymentModal(order: OrderDto, on_close: EventHandler<()>) -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let api = use_api();
    let mut processing = use_signal(|| false);

    let unit_price = if order.quantity > 0 {
        order.price / f64::from(order.quantity)
    } else {
        0.0
    };

    let pay_order = order.clone();
    let pay = move |_: MouseEvent| {
        let Some(customer) = session.read().user.as_ref().map(|user| user.as_customer()) else {
            notify_error(toasts, "Please log in to continue");
            return;
        };
        let request = match checkout_request(&pay_order, customer) {
            Ok(request) => request,
            Err(e) => {
                notify_error(toasts, e.to_string());
                return;
            }
        };
        let api = api.clone();

        spawn(async move {
            processing.set(true);
            match api.create_checkout_session(&request).await {
                Ok(session) => browser::redirect(&session.url),
                Err(e) => {
                    tracing::error!("Checkout failed for order {}: {}", request.order_id, e);
                    notify_error(toasts, "Failed to process payment");
                    processing.set(false);
                }
            }
        });
    };

    rsx!(
        Modal { title: "Complete Payment", on_close,
            div { class: "flex flex-col gap-2",
                p { class: "font-semibold", "{order.name}" }
                if let Some(route) = order.route() {
                    p { class: "text-sm", "{route}" }
                }
                p { class: "text-sm", "Quantity: {order.quantity}" }
                p { class: "text-sm", "Unit price: {format::money(unit_price)}" }
                p { class: "text-lg font-bold", "Total: {format::money(order.price)}" }
            }
            div { class: "modal-action",
                button { class: "btn", onclick: move |_| on_close.call(()), "Cancel" }
                button {
                    class: "btn btn-primary",
                    disabled: processing(),
                    onclick: pay,
                    if processing() {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Pay {format::money(order.price)}"
                }
            }
        }
    )
}

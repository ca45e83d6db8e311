use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleCheck;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{ErrorMessage, Loading, Page},
    router::Route,
    store::{query::QueryResource, use_api, use_query_cache},
};

/// Landing page for the hosted checkout redirect.
///
/// Confirms the session once; the order lists are refreshed afterwards so the paid status shows.
#[component]
pub fn PaymentSuccess(session_id: String) -> Element {
    let api = use_api();
    let mut cache = use_query_cache();

    let receipt = use_resource(use_reactive!(|session_id| {
        let api = api.clone();
        async move {
            if session_id.is_empty() {
                return Ok(None);
            }
            let receipt = api.confirm_payment(&session_id).await;
            match &receipt {
                Ok(_) => cache.write().invalidate(&QueryResource::ORDERS),
                Err(e) => tracing::error!("Failed to confirm payment {}: {}", session_id, e),
            }
            receipt.map(Some)
        }
    }));

    rsx!(
        Title { "TicketMaster | Payment Successful" }
        Page { class: "flex items-center justify-center",
            {match &*receipt.read() {
                None => rsx!(Loading {}),
                Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to confirm payment") }),
                Some(Ok(receipt)) => {
                    let transaction = receipt
                        .as_ref()
                        .and_then(|receipt| receipt.transaction_id.clone());
                    rsx!(
                        div { class: "card w-full max-w-lg bg-base-200 shadow-xl",
                            div { class: "card-body items-center text-center gap-4",
                                Icon { class: "text-success", width: 64, height: 64, icon: FaCircleCheck }
                                h1 { class: "card-title text-2xl", "Payment Successful" }
                                p { "Your tickets are booked. Have a great trip!" }
                                if let Some(transaction) = transaction {
                                    p { class: "text-sm",
                                        "Transaction ID: "
                                        span { class: "font-mono", "{transaction}" }
                                    }
                                }
                                Link { to: Route::MyOrders {}, class: "btn btn-primary", "View My Tickets" }
                            }
                        }
                    )
                }
            }}
        }
    )
}

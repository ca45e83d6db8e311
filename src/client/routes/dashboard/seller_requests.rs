use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{dashboard::RoleGate, EmptyState, ErrorMessage, Loading, SectionTitle},
        store::{
            query::{use_query, QueryKey, QueryResource},
            toast::{notify_error, notify_success},
            use_api, use_query_cache, use_toasts,
        },
    },
    model::user::{Role, SellerRequestStatus, UserDto},
};

#[component]
fn SellerRequestRow(user: UserDto) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut cache = use_query_cache();
    let mut reviewing = use_signal(|| false);

    let email = user.email.clone();
    let review = use_callback(move |status: SellerRequestStatus| {
        let api = api.clone();
        let email = email.clone();
        spawn(async move {
            reviewing.set(true);
            match api.review_seller_request(&email, status).await {
                Ok(_) => {
                    let message = match status {
                        SellerRequestStatus::Approved => "Seller request approved",
                        _ => "Seller request rejected",
                    };
                    notify_success(toasts, message);
                    cache.write().invalidate(&[QueryResource::SellerRequests, QueryResource::Users]);
                }
                Err(e) => {
                    tracing::error!("Failed to review seller request of {}: {}", email, e);
                    notify_error(toasts, e.user_message("Failed to review seller request"));
                }
            }
            reviewing.set(false);
        });
    });

    let name = user.name.clone().unwrap_or_default();

    rsx!(
        tr {
            td { "{name}" }
            td { "{user.email}" }
            td { "{user.role.label()}" }
            td {
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-xs btn-success",
                        disabled: reviewing(),
                        onclick: move |_| review.call(SellerRequestStatus::Approved),
                        "Approve"
                    }
                    button {
                        class: "btn btn-xs btn-error",
                        disabled: reviewing(),
                        onclick: move |_| review.call(SellerRequestStatus::Rejected),
                        "Reject"
                    }
                }
            }
        }
    )
}

#[component]
fn SellerRequestsTable() -> Element {
    let requests = use_query(
        QueryKey::new(QueryResource::SellerRequests),
        |api, _| async move { api.get_seller_requests().await },
    );

    rsx!(
        {match &*requests.read() {
            None => rsx!(Loading {}),
            Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load seller requests") }),
            Some(Ok(requests)) if requests.is_empty() => rsx!(EmptyState { message: "No pending seller requests" }),
            Some(Ok(requests)) => rsx!(
                div { class: "overflow-x-auto bg-base-100 rounded-box shadow",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Current Role" }
                                th { "Action" }
                            }
                        }
                        tbody {
                            for user in requests.iter() {
                                SellerRequestRow { key: "{user.email}", user: user.clone() }
                            }
                        }
                    }
                }
            ),
        }}
    )
}

#[component]
pub fn SellerRequests() -> Element {
    rsx!(
        Title { "TicketMaster | Seller Requests" }
        RoleGate { role: Role::Admin,
            SectionTitle { title: "Seller Requests" }
            SellerRequestsTable {}
        }
    )
}

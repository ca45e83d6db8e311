use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{dashboard::RoleGate, EmptyState, ErrorMessage, Loading, SectionTitle},
        store::{
            query::{use_query, QueryKey, QueryResource},
            toast::{notify_error, notify_success},
            use_api, use_query_cache, use_session, use_toasts,
        },
        util::{format, lifecycle::Optimistic},
    },
    model::user::{Role, UserDto},
};

#[component]
fn UserRow(user: UserDto, is_self: bool) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut cache = use_query_cache();
    let mut role = use_signal(|| Optimistic::new(user.role));

    use_effect(use_reactive!(|user| {
        role.write().sync(user.role);
    }));

    let email = user.email.clone();
    let change_role = move |event: FormEvent| {
        let Some(next) = Role::parse(&event.value()) else {
            return;
        };
        if next == role.peek().displayed() {
            return;
        }

        role.write().begin(next);
        let api = api.clone();
        let email = email.clone();
        spawn(async move {
            match api.update_user_role(&email, next).await {
                Ok(_) => {
                    role.write().commit();
                    notify_success(toasts, format!("{email} is now {}", next.label()));
                    cache.write().invalidate(&[QueryResource::Users, QueryResource::SellerRequests]);
                }
                Err(e) => {
                    tracing::error!("Failed to change role of {}: {}", email, e);
                    role.write().rollback();
                    notify_error(toasts, e.user_message("Failed to update role"));
                }
            }
        });
    };

    let current = role.read().displayed();
    let name = user.name.clone().unwrap_or_default();
    let initial = format::initial(user.name.as_deref(), &user.email);

    rsx!(
        tr {
            td {
                div { class: "flex items-center gap-3",
                    if let Some(image) = &user.image {
                        img { class: "h-10 w-10 rounded-full object-cover", src: "{image}", alt: "{name}" }
                    } else {
                        div { class: "avatar placeholder",
                            div { class: "bg-neutral text-neutral-content h-10 w-10 rounded-full",
                                span { "{initial}" }
                            }
                        }
                    }
                    span { "{name}" }
                }
            }
            td { "{user.email}" }
            td {
                select {
                    class: "select select-bordered select-sm",
                    value: current.as_str(),
                    // Admins cannot demote themselves.
                    disabled: is_self || role.read().is_pending(),
                    onchange: change_role,
                    for option in Role::ALL {
                        option { value: option.as_str(), selected: option == current, "{option.label()}" }
                    }
                }
            }
        }
    )
}

#[component]
fn UsersTable() -> Element {
    let session = use_session();
    let viewer = session.read().email().unwrap_or_default().to_string();
    let users = use_query(QueryKey::new(QueryResource::Users), |api, _| async move {
        api.get_users().await
    });

    rsx!(
        {match &*users.read() {
            None => rsx!(Loading {}),
            Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load users") }),
            Some(Ok(users)) if users.is_empty() => rsx!(EmptyState { message: "No users found" }),
            Some(Ok(users)) => rsx!(
                div { class: "overflow-x-auto bg-base-100 rounded-box shadow",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Role" }
                            }
                        }
                        tbody {
                            for user in users.iter() {
                                UserRow {
                                    key: "{user.email}",
                                    user: user.clone(),
                                    is_self: user.email == viewer,
                                }
                            }
                        }
                    }
                }
            ),
        }}
    )
}

#[component]
pub fn ManageUsers() -> Element {
    rsx!(
        Title { "TicketMaster | Manage Users" }
        RoleGate { role: Role::Admin,
            SectionTitle { title: "Manage Users" }
            UsersTable {}
        }
    )
}

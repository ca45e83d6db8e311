use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::IdentityClient,
        auth,
        components::{Loading, Modal},
        config::ClientConfig,
        store::{
            session::SessionUser,
            toast::{notify_error, notify_success},
            use_api, use_session, use_toasts,
        },
        util::{format, password::PasswordChange},
    },
    model::user::Role,
};

#[component]
fn ChangePasswordModal(user: SessionUser, on_close: EventHandler<()>) -> Element {
    let config = use_context::<ClientConfig>();
    let session = use_session();
    let toasts = use_toasts();
    let mut form = use_signal(PasswordChange::default);
    let mut saving = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let change = form();
        let new_password = match change.validate() {
            Ok(password) => password.to_string(),
            Err(e) => {
                notify_error(toasts, e.to_string());
                return;
            }
        };

        let identity = IdentityClient::from_config(&config);
        let user = user.clone();
        spawn(async move {
            saving.set(true);
            match identity
                .change_password(&user, &change.current, &new_password)
                .await
            {
                Ok(refreshed) => {
                    auth::refresh_user(session, refreshed);
                    notify_success(toasts, "Password changed successfully");
                    form.set(PasswordChange::default());
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!("Password change failed: {}", e);
                    notify_error(
                        toasts,
                        e.user_message("Failed to change password. Please try again"),
                    );
                }
            }
            saving.set(false);
        });
    };

    rsx!(
        Modal { title: "Change Password", on_close,
            form { class: "flex flex-col gap-3", onsubmit,
                label { class: "form-control w-full",
                    span { class: "label-text", "Current Password" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Enter current password",
                        disabled: saving(),
                        value: "{form.read().current}",
                        oninput: move |e| form.write().current = e.value(),
                    }
                }
                label { class: "form-control w-full",
                    span { class: "label-text", "New Password" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Enter new password",
                        disabled: saving(),
                        value: "{form.read().new}",
                        oninput: move |e| form.write().new = e.value(),
                    }
                }
                label { class: "form-control w-full",
                    span { class: "label-text", "Confirm New Password" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Confirm new password",
                        disabled: saving(),
                        value: "{form.read().confirm}",
                        oninput: move |e| form.write().confirm = e.value(),
                    }
                }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        r#type: "button",
                        disabled: saving(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button { class: "btn btn-primary", r#type: "submit", disabled: saving(),
                        if saving() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Change Password"
                    }
                }
            }
        }
    )
}

/// Lets a customer ask an admin for seller access.
#[component]
fn BecomeSeller() -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut requested = use_signal(|| false);
    let mut sending = use_signal(|| false);

    let request = move |_: MouseEvent| {
        let api = api.clone();
        spawn(async move {
            sending.set(true);
            match api.request_seller().await {
                Ok(_) => {
                    requested.set(true);
                    notify_success(toasts, "Seller request sent");
                }
                Err(e) => {
                    tracing::error!("Failed to request seller access: {}", e);
                    notify_error(toasts, e.user_message("Failed to send seller request"));
                }
            }
            sending.set(false);
        });
    };

    rsx!(
        button {
            class: "btn btn-outline btn-secondary btn-sm",
            disabled: requested() || sending(),
            onclick: request,
            if requested() { "Seller Request Pending" } else { "Become a Seller" }
        }
    )
}

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let mut changing_password = use_signal(|| false);

    let (user, role) = {
        let state = session.read();
        (state.user.clone(), state.role)
    };
    let Some(user) = user else {
        return rsx!(Loading {});
    };

    let name = user.display_name.clone().unwrap_or_default();
    let initial = format::initial(user.display_name.as_deref(), &user.email);

    rsx!(
        Title { "TicketMaster | Profile" }
        div { class: "flex justify-center py-8",
            div { class: "card w-full md:w-4/5 lg:w-3/5 bg-base-100 shadow-xl",
                div { class: "h-40 rounded-t-box bg-gradient-to-r from-primary to-secondary" }
                div { class: "card-body items-center -mt-20 gap-3",
                    if let Some(photo) = &user.photo_url {
                        img {
                            class: "h-24 w-24 rounded-full object-cover border-4 border-base-100",
                            src: "{photo}",
                            alt: "profile",
                        }
                    } else {
                        div { class: "avatar placeholder",
                            div { class: "bg-neutral text-neutral-content h-24 w-24 rounded-full border-4 border-base-100",
                                span { class: "text-3xl", "{initial}" }
                            }
                        }
                    }
                    if let Some(role) = role {
                        span { class: "badge badge-secondary", "{role.label()}" }
                    }
                    p { class: "text-lg font-medium", "User Id: {user.uid}" }
                    div { class: "flex w-full flex-wrap items-center justify-between gap-4 mt-4 text-sm",
                        p { class: "flex flex-col",
                            "Name"
                            span { class: "font-bold", "{name}" }
                        }
                        p { class: "flex flex-col",
                            "Email"
                            span { class: "font-bold", "{user.email}" }
                        }
                        div { class: "flex gap-2",
                            if role == Some(Role::Customer) {
                                BecomeSeller {}
                            }
                            button {
                                class: "btn btn-primary btn-sm",
                                onclick: move |_| changing_password.set(true),
                                "Change Password"
                            }
                        }
                    }
                }
            }
        }
        if changing_password() {
            ChangePasswordModal {
                user: user.clone(),
                on_close: move |_| changing_password.set(false),
            }
        }
    )
}

use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::IdentityClient,
    auth,
    components::Page,
    config::ClientConfig,
    router::Route,
    store::{
        toast::{notify_error, notify_success},
        use_query_cache, use_session, use_toasts,
    },
    util::password::MIN_PASSWORD_LENGTH,
};

#[component]
pub fn Signup() -> Element {
    let config = use_context::<ClientConfig>();
    let session = use_session();
    let cache = use_query_cache();
    let toasts = use_toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut photo_url = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if session.read().is_signed_in() {
            navigator().replace(Route::Home {});
        }
    });

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        if name.read().trim().is_empty() || email.read().trim().is_empty() {
            notify_error(toasts, "Name and email are required");
            return;
        }
        if password.read().chars().count() < MIN_PASSWORD_LENGTH {
            notify_error(
                toasts,
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            );
            return;
        }

        let config = config.clone();
        spawn(async move {
            submitting.set(true);
            let identity = IdentityClient::from_config(&config);
            let email = email.read().trim().to_string();
            let password = password.read().clone();
            let name = name.read().trim().to_string();
            let photo = photo_url.read().trim().to_string();

            let result = identity
                .sign_up(
                    &email,
                    &password,
                    &name,
                    (!photo.is_empty()).then_some(photo.as_str()),
                )
                .await;

            match result {
                Ok(user) => {
                    auth::complete_sign_in(&config, session, cache, user).await;
                    notify_success(toasts, "Signup successful");
                }
                Err(e) => {
                    tracing::warn!("Signup failed: {}", e);
                    notify_error(toasts, e.user_message("Signup failed"));
                }
            }
            submitting.set(false);
        });
    };

    rsx!(
        Title { "TicketMaster | Sign Up" }
        Page { class: "flex items-center justify-center",
            div { class: "card w-full max-w-md bg-base-200 shadow-xl",
                form { class: "card-body gap-3", onsubmit,
                    h1 { class: "card-title text-2xl justify-center", "Sign Up" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "url",
                        placeholder: "Profile image URL (optional)",
                        value: "{photo_url}",
                        oninput: move |e| photo_url.set(e.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    button {
                        class: "btn btn-primary w-full",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Create Account"
                    }
                    p { class: "text-sm text-center",
                        "Already have an account? "
                        Link { to: Route::Login {}, class: "link link-primary", "Log in" }
                    }
                }
            }
        }
    )
}

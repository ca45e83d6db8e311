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
};

#[component]
pub fn Login() -> Element {
    let config = use_context::<ClientConfig>();
    let session = use_session();
    let cache = use_query_cache();
    let toasts = use_toasts();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Already signed in viewers have nothing to do here.
    use_effect(move || {
        if session.read().is_signed_in() {
            navigator().replace(Route::Home {});
        }
    });

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        if email.read().trim().is_empty() || password.read().is_empty() {
            notify_error(toasts, "Email and password are required");
            return;
        }

        let config = config.clone();
        spawn(async move {
            submitting.set(true);
            let identity = IdentityClient::from_config(&config);
            let email = email.read().trim().to_string();
            let password = password.read().clone();

            match identity.sign_in(&email, &password).await {
                Ok(user) => {
                    auth::complete_sign_in(&config, session, cache, user).await;
                    notify_success(toasts, "Login successful");
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    notify_error(toasts, e.user_message("Login failed"));
                }
            }
            submitting.set(false);
        });
    };

    rsx!(
        Title { "TicketMaster | Login" }
        Page { class: "flex items-center justify-center",
            div { class: "card w-full max-w-md bg-base-200 shadow-xl",
                form { class: "card-body gap-3", onsubmit,
                    h1 { class: "card-title text-2xl justify-center", "Log In" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
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
                        "Continue"
                    }
                    p { class: "text-sm text-center",
                        "Don't have an account yet? "
                        Link { to: Route::Signup {}, class: "link link-primary", "Sign up" }
                    }
                }
            }
        }
    )
}

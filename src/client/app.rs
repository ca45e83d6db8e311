use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    auth, browser,
    components::ToastHost,
    config::ClientConfig,
    router::Route,
    store::{query::QueryCache, session::SessionState, theme::Theme, toast::Toasts},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
fn ConfigErrorPage(message: String) -> Element {
    rsx!(
        div { class: "min-h-screen flex items-center justify-center p-8",
            div { class: "alert alert-error max-w-xl",
                div {
                    h1 { class: "font-bold text-lg", "TicketMaster is not configured" }
                    p { "{message}" }
                }
            }
        }
    )
}

#[component]
fn Shell(config: ClientConfig) -> Element {
    use_context_provider(|| config.clone());
    let session = use_context_provider(|| Signal::new(SessionState::default()));
    use_context_provider(|| Signal::new(Toasts::default()));
    use_context_provider(|| Signal::new(QueryCache::default()));
    let mut theme = use_context_provider(|| Signal::new(Theme::default()));

    use_future(move || {
        let config = config.clone();
        async move { auth::restore_session(config, session).await }
    });

    use_future(move || async move {
        let saved = browser::saved_theme().await;
        browser::apply_theme(saved);
        theme.set(saved);
    });

    rsx!(
        Router::<Route> {}
        ToastHost {}
    )
}

#[component]
pub fn App() -> Element {
    let config = use_hook(ClientConfig::from_build_env);

    rsx!(
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        document::Stylesheet { href: MAIN_CSS }

        {match config {
            Ok(config) => rsx!(Shell { config }),
            Err(e) => {
                tracing::error!("Configuration error: {}", e);
                rsx!(ConfigErrorPage { message: e.to_string() })
            }
        }}
    )
}

pub mod query;
pub mod session;
pub mod theme;
pub mod toast;

use dioxus::prelude::*;

use crate::client::{
    api::ApiClient,
    config::ClientConfig,
    store::{query::QueryCache, session::SessionState, theme::Theme, toast::Toasts},
};

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn use_query_cache() -> Signal<QueryCache> {
    use_context::<Signal<QueryCache>>()
}

pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Backend client carrying the current session token, for event handlers.
pub fn use_api() -> ApiClient {
    let config = use_context::<ClientConfig>();
    let session = use_session();
    let token = session.read().token().map(str::to_string);

    ApiClient::new(&config.api_url, token.as_deref())
}

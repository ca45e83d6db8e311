//! Small browser interop helpers run through `document::eval`.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::store::theme::{Theme, THEME_STORAGE_KEY};

pub const TOKEN_STORAGE_KEY: &str = "ticketmaster.idToken";

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

pub async fn storage_get(key: &str) -> Option<String> {
    let script = format!("return window.localStorage.getItem({});", js_string(key));

    match document::eval(&script).join::<Option<String>>().await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read {} from local storage: {:?}", key, e);
            None
        }
    }
}

pub fn storage_set(key: &str, value: &str) {
    let script = format!(
        "window.localStorage.setItem({}, {});",
        js_string(key),
        js_string(value)
    );
    document::eval(&script);
}

pub fn storage_remove(key: &str) {
    let script = format!("window.localStorage.removeItem({});", js_string(key));
    document::eval(&script);
}

pub async fn prefers_dark() -> bool {
    document::eval("return window.matchMedia('(prefers-color-scheme: dark)').matches;")
        .join::<bool>()
        .await
        .unwrap_or(false)
}

/// Apply `theme` to the document root and remember it.
pub fn apply_theme(theme: Theme) {
    let script = format!(
        "document.documentElement.classList.toggle('dark', {dark});\
         document.documentElement.setAttribute('data-theme', {name});",
        dark = theme.is_dark(),
        name = js_string(theme.as_str()),
    );
    document::eval(&script);
    storage_set(THEME_STORAGE_KEY, theme.as_str());
}

pub async fn saved_theme() -> Theme {
    let saved = storage_get(THEME_STORAGE_KEY).await;
    Theme::from_saved(saved.as_deref(), prefers_dark().await)
}

/// Leave the app for an external page such as the hosted checkout.
pub fn redirect(url: &str) {
    document::eval(&format!("window.location.href = {};", js_string(url)));
}

pub fn scroll_to_top() {
    document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-6xl font-bold", "404" }
            p { "Nothing lives at /{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to Home" }
        }
    )
}

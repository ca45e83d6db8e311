use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx!(
        div { class: "flex w-full justify-center py-16",
            span { class: "loading loading-spinner loading-lg text-primary" }
        }
    )
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx!(
        div { class: "alert alert-error my-4",
            span { "{message}" }
        }
    )
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx!(
        div { class: "flex w-full justify-center py-16 text-base-content/60",
            p { "{message}" }
        }
    )
}

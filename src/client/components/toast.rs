use dioxus::prelude::*;

use crate::client::store::use_toasts;

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let items = toasts.read().items().to_vec();

    rsx!(
        div { class: "toast toast-top toast-end z-50",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: "alert {toast.kind.alert_class()} shadow-lg",
                    span { "{toast.message}" }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    )
}

use dioxus::prelude::*;

#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                button {
                    class: "btn btn-sm btn-circle btn-ghost absolute right-2 top-2",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                h3 { class: "text-lg font-bold mb-4", "{title}" }
                {children}
            }
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    )
}

/// Yes/no confirmation before a destructive action.
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_label: Option<String>,
    busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_label = confirm_label.unwrap_or_else(|| "Confirm".to_string());

    rsx!(
        Modal { title, on_close: on_cancel,
            p { class: "py-2", "{message}" }
            div { class: "modal-action",
                button {
                    class: "btn",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-error",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "{confirm_label}"
                }
            }
        }
    )
}

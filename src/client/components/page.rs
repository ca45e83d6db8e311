use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-[calc(100vh-64px)] w-full max-w-[1440px] mx-auto px-4 py-8 {class}",
            {children}
        }
    )
}

/// Section heading with an optional subtitle.
#[component]
pub fn SectionTitle(title: String, subtitle: Option<String>) -> Element {
    rsx!(
        div { class: "flex flex-col items-center gap-2 mb-8 text-center",
            h2 { class: "text-3xl font-bold", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "text-base-content/70 max-w-2xl", "{subtitle}" }
            }
        }
    )
}

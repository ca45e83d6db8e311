use dioxus::prelude::*;

use crate::client::util::chart::{bar_percentages, ChartPoint};

#[component]
pub fn StatCard(title: String, value: String, hint: Option<String>) -> Element {
    rsx!(
        div { class: "stat bg-base-100 rounded-box shadow",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value text-primary text-2xl", "{value}" }
            if let Some(hint) = hint {
                div { class: "stat-desc", "{hint}" }
            }
        }
    )
}

/// Horizontal bars sized relative to the largest value in the series.
#[component]
pub fn BarChart(title: String, points: Vec<ChartPoint>, money: Option<bool>) -> Element {
    let money = money.unwrap_or(false);
    let rows: Vec<(String, String, String)> = points
        .iter()
        .zip(bar_percentages(&points))
        .map(|(point, width)| {
            let value = if money {
                format!("${:.2}", point.value)
            } else {
                format!("{}", point.value)
            };
            (point.label.clone(), format!("width: {width:.1}%"), value)
        })
        .collect();

    rsx!(
        div { class: "card bg-base-100 shadow",
            div { class: "card-body",
                h3 { class: "card-title text-base", "{title}" }
                if points.is_empty() {
                    p { class: "text-sm text-base-content/60", "No data yet" }
                }
                for (label, style, value) in rows {
                    div { class: "flex items-center gap-3",
                        span { class: "w-40 truncate text-sm", title: "{label}", "{label}" }
                        div { class: "flex-1 bg-base-200 rounded h-4",
                            div { class: "bg-primary rounded h-4", style }
                        }
                        span { class: "w-24 text-right text-sm font-mono", "{value}" }
                    }
                }
            }
        }
    )
}

use dioxus::prelude::*;

use crate::core::format;
use crate::core::pipeline::{StatsSnapshot, CHART_COLORS};
use crate::core::state::{AppEvent, AppState};

/// Counter grid over the current snapshot. Shows the first four metrics by
/// default; the expand toggle is a pure view projection and never touches
/// the snapshot itself.
#[component]
pub fn StatGrid(snapshot: StatsSnapshot, expanded: bool) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let visible = snapshot.visible_metrics(expanded).to_vec();
    let hidden = snapshot.hidden_metric_count();

    rsx! {
        div { class: "stat-grid",
            div { class: "stat-box stat-box--total",
                span { class: "stat-box__value", "{format::format_count(snapshot.total_count)}" }
                span { class: "stat-box__label", "Entries" }
            }
            for (idx, metric) in visible.iter().enumerate() {
                div { key: "{metric.label}", class: "stat-box",
                    span {
                        class: "stat-box__value",
                        style: "color: {CHART_COLORS[idx % CHART_COLORS.len()]}",
                        "{metric.value}"
                    }
                    span { class: "stat-box__label", "{metric.label}" }
                }
            }
        }
        if hidden > 0 {
            button {
                r#type: "button",
                class: "button button--ghost stat-grid__expand",
                onclick: move |_| state.write().apply(AppEvent::ToggleStatsExpanded),
                if expanded { "Show fewer metrics" } else { "Show all metrics (+{hidden})" }
            }
        }
    }
}

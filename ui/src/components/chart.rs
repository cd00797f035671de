use dioxus::prelude::*;

use crate::core::format;
use crate::core::pipeline::{chart_segments, StatsSnapshot};
use crate::core::theme::Theme;

// Donut geometry: radius chosen so the circumference is 100 units, letting
// stroke-dasharray lengths be plain percentages.
const RADIUS: f64 = 15.915_494_309;

/// Pure SVG projection of the snapshot's category distribution.
#[component]
pub fn DonutChart(snapshot: StatsSnapshot, theme: Theme) -> Element {
    let segments = chart_segments(&snapshot);
    if segments.is_empty() {
        return rsx! {
            p { class: "placeholder", "No category column detected in this dataset." }
        };
    }

    // Arcs start at 12 o'clock and run clockwise in category order.
    let mut offset = 25.0;
    let arcs: Vec<_> = segments
        .iter()
        .map(|segment| {
            let length = segment.fraction * 100.0;
            let arc = (segment.color, length, offset);
            offset -= length;
            arc
        })
        .collect();

    rsx! {
        div { class: "donut",
            h2 { class: "donut__title", "Data Distribution" }
            div { class: "donut__body",
                svg {
                    class: "donut__svg",
                    view_box: "0 0 42 42",
                    circle {
                        cx: "21",
                        cy: "21",
                        r: "{RADIUS}",
                        fill: "none",
                        stroke: theme.chart_hole_color(),
                        stroke_width: "8",
                    }
                    for (idx, (color, length, start)) in arcs.iter().enumerate() {
                        circle {
                            key: "{idx}",
                            cx: "21",
                            cy: "21",
                            r: "{RADIUS}",
                            fill: "none",
                            stroke: "{color}",
                            stroke_width: "8",
                            stroke_dasharray: "{length} {100.0 - length}",
                            stroke_dashoffset: "{start}",
                        }
                    }
                }
                ul { class: "donut__legend",
                    for segment in segments.iter() {
                        li { key: "{segment.label}", class: "donut__legend-item",
                            span {
                                class: "donut__swatch",
                                style: "background: {segment.color}",
                            }
                            span { class: "donut__label", "{segment.label}" }
                            span { class: "donut__value",
                                "{segment.value} ({format::format_percent(segment.fraction)})"
                            }
                        }
                    }
                }
            }
        }
    }
}

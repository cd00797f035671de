use dioxus::prelude::*;

use crate::app::SharedPipeline;
use crate::core::format;
use crate::core::state::{AppEvent, AppState};

/// Modal listing of past successful uploads, newest first.
#[component]
pub fn HistoryOverlay() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let pipeline = use_context::<Signal<SharedPipeline>>();
    let entries = pipeline.read().history().entries().to_vec();

    rsx! {
        div { class: "overlay",
            div { class: "overlay__card",
                div { class: "overlay__header",
                    h2 { "Upload history" }
                    button {
                        r#type: "button",
                        class: "overlay__close",
                        onclick: move |_| state.write().apply(AppEvent::CloseHistory),
                        "✕"
                    }
                }

                if entries.is_empty() {
                    p { class: "placeholder", "No uploads recorded in this browser yet." }
                } else {
                    ul { class: "history-list",
                        for (idx, entry) in entries.iter().enumerate() {
                            li { key: "{idx}", class: "history-list__item",
                                span { class: "history-list__file", "{entry.file_name}" }
                                span { class: "history-list__rows",
                                    "{format::format_count(entry.row_count)} rows"
                                }
                                span { class: "history-list__date", "{entry.timestamp}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::app::SharedPipeline;
use crate::components::{
    DonutChart, HistoryOverlay, MenuPanel, NoticeBanner, ProfileOverlay, StatGrid,
};
use crate::core::pipeline::request_snapshot;
use crate::core::remote::HttpRemote;
use crate::core::state::{AppEvent, AppState};

#[component]
pub fn Dashboard() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let pipeline = use_context::<Signal<SharedPipeline>>();
    let remote = use_context::<HttpRemote>();

    let overlays = state.read().overlays;
    let theme = state.read().theme;
    let operator = state
        .read()
        .session
        .as_ref()
        .map(|session| session.name.clone())
        .unwrap_or_default();
    let snapshot = pipeline.read().snapshot().cloned();

    let on_file = move |evt: FormEvent| {
        let remote = remote.clone();
        let mut pipeline = pipeline;
        spawn(async move {
            let Some(file_engine) = evt.files() else {
                return;
            };
            let Some(name) = file_engine.files().first().cloned() else {
                return;
            };
            let Some(bytes) = file_engine.read_file(&name).await else {
                return;
            };
            let token = state.write().issue_token();
            match request_snapshot(&remote, &name, bytes).await {
                Ok(snapshot) => {
                    // A logout while the upload was in flight makes this
                    // response meaningless; drop it instead of committing.
                    let fresh = {
                        let current = state.read();
                        current.accepts(token) && current.session.is_some()
                    };
                    if fresh {
                        pipeline.write().ingest(&name, snapshot);
                    }
                }
                Err(_) => state.write().apply(AppEvent::UploadFailed { token }),
            }
        });
    };

    rsx! {
        section { class: "console-shell",
            header { class: "console-header",
                div {
                    h1 { "Console: {operator}" }
                    p { class: "console-status", "System online · ready" }
                }
                button {
                    r#type: "button",
                    class: "menu-button",
                    onclick: move |_| state.write().apply(AppEvent::ToggleMenu),
                    "☰"
                }
            }

            if overlays.menu_open {
                MenuPanel {}
            }

            NoticeBanner {}

            label {
                class: "upload-area",
                r#for: "dataset-input",
                "📂 Load dataset (CSV, Excel, JSON)"
            }
            input {
                id: "dataset-input",
                class: "visually-hidden",
                r#type: "file",
                accept: ".csv,.xlsx,.xls,.json",
                onchange: on_file,
            }

            match snapshot {
                Some(snapshot) => rsx! {
                    StatGrid { snapshot: snapshot.clone(), expanded: overlays.stats_expanded }
                    DonutChart { snapshot, theme }
                },
                None => rsx! {
                    p { class: "placeholder", "Upload a dataset to see stats…" }
                },
            }

            if overlays.history_open {
                HistoryOverlay {}
            }
            if overlays.profile_edit_open {
                ProfileOverlay {}
            }
        }
    }
}

use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::app::SharedPipeline;
use crate::core::platform;
use crate::core::report;
use crate::core::state::{AppEvent, AppState, Notice};
use crate::core::theme::Theme;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// The ☰ menu. Opening an overlay from here closes the menu (reducer rule);
/// the export action runs against whatever snapshot is current.
#[component]
pub fn MenuPanel() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let pipeline = use_context::<Signal<SharedPipeline>>();

    let theme = state.read().theme;
    let theme_label = match theme {
        Theme::Light => "🌙 Switch to dark",
        Theme::Dark => "☀️ Switch to light",
    };

    let on_export = move |_| {
        // Close the menu like any other overlay launch.
        state.write().apply(AppEvent::ToggleMenu);
        let snapshot = pipeline.read().snapshot().cloned();
        spawn(async move {
            let now = OffsetDateTime::now_utc();
            let layout = match report::compose(snapshot.as_ref(), now) {
                Ok(layout) => layout,
                Err(error) => {
                    state.write().apply(AppEvent::NoticePosted {
                        notice: Notice::Error(error.to_string()),
                    });
                    return;
                }
            };
            let outcome = match report::render_xlsx(&layout) {
                Ok(bytes) => {
                    platform::download_bytes(&report::export_filename(now), XLSX_MIME, bytes).await
                }
                Err(detail) => Err(detail),
            };
            let notice = match outcome {
                Ok(Some(path)) => Notice::Info(format!("Report saved to {path}")),
                Ok(None) => Notice::Info("Report download started".to_string()),
                Err(detail) => Notice::Error(format!("Report export failed: {detail}")),
            };
            state.write().apply(AppEvent::NoticePosted { notice });
        });
    };

    rsx! {
        nav { class: "menu-panel",
            button {
                r#type: "button",
                class: "menu-panel__item",
                onclick: move |_| state.write().apply(AppEvent::OpenProfileEdit),
                "👤 Edit profile"
            }
            button {
                r#type: "button",
                class: "menu-panel__item",
                onclick: move |_| state.write().apply(AppEvent::OpenHistory),
                "🗂 Upload history"
            }
            button {
                r#type: "button",
                class: "menu-panel__item",
                onclick: on_export,
                "📄 Export report"
            }
            button {
                r#type: "button",
                class: "menu-panel__item",
                onclick: move |_| state.write().apply(AppEvent::ToggleTheme),
                "{theme_label}"
            }
            hr { class: "menu-panel__rule" }
            button {
                r#type: "button",
                class: "menu-panel__item menu-panel__item--logout",
                onclick: move |_| state.write().apply(AppEvent::Logout),
                "🚪 Log out"
            }
        }
    }
}

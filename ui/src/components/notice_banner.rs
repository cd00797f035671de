use dioxus::prelude::*;

use crate::core::state::{AppEvent, AppState, Notice};

/// The single user-facing notification slot, rendered wherever the active
/// screen wants it. Dismissible; replaced wholesale by the next notice.
#[component]
pub fn NoticeBanner() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let notice = state.read().notice.clone();

    let Some(notice) = notice else {
        return rsx! {};
    };

    let class = match notice {
        Notice::Info(_) => "notice notice--info",
        Notice::Error(_) => "notice notice--error",
    };

    rsx! {
        div { class: "{class}",
            span { class: "notice__text", "{notice.text()}" }
            button {
                r#type: "button",
                class: "notice__dismiss",
                onclick: move |_| state.write().apply(AppEvent::DismissNotice),
                "✕"
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::ThemeToggle;
use crate::core::state::{AppEvent, AppState};

#[component]
pub fn Welcome() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        section { class: "auth-screen",
            div { class: "auth-card auth-card--welcome",
                ThemeToggle {}
                h1 { class: "auth-card__title", "Universal Data Console" }
                p { class: "auth-card__subtitle", "Upload a dataset, explore its metrics." }
                div { class: "auth-card__emblem", "🧪" }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| state.write().apply(AppEvent::Launch),
                    "Initialize System"
                }
            }
        }
    }
}

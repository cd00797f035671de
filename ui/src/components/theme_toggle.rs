use dioxus::prelude::*;

use crate::core::state::{AppEvent, AppState};
use crate::core::theme::Theme;

/// Standalone light/dark switch for the pre-auth screens. Logged-in screens
/// reach the same event through the menu instead.
#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let glyph = match state.read().theme {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            title: "Switch theme",
            onclick: move |_| state.write().apply(AppEvent::ToggleTheme),
            "{glyph}"
        }
    }
}

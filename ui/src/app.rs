//! Root component: owns the shared state signals and selects the primary
//! view. The `web` and `desktop` crates both launch this.

use dioxus::prelude::*;

use crate::core::history::{HistoryLog, HISTORY_KEY};
use crate::core::pipeline::DatasetPipeline;
use crate::core::platform::PlatformStore;
use crate::core::remote::HttpRemote;
use crate::core::state::{AppState, PrimaryView};
use crate::views::{Admin, Dashboard, Login, Signup, Welcome};

/// The pipeline as shared through context, bound to the platform store.
pub type SharedPipeline = DatasetPipeline<PlatformStore>;

const THEME_CSS: &str = include_str!("../assets/theme/main.css");

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::new);
    let pipeline: Signal<SharedPipeline> = use_signal(|| {
        DatasetPipeline::new(HistoryLog::load(PlatformStore::new(HISTORY_KEY)))
    });
    use_context_provider(|| state);
    use_context_provider(|| pipeline);
    use_context_provider(HttpRemote::default);

    let theme = state.read().theme;
    let view = state.read().view;

    rsx! {
        document::Style { "{THEME_CSS}" }

        div { class: "console-root", "data-theme": theme.attribute(),
            match view {
                PrimaryView::Welcome => rsx! { Welcome {} },
                PrimaryView::Login => rsx! { Login {} },
                PrimaryView::Signup => rsx! { Signup {} },
                PrimaryView::Dashboard => rsx! { Dashboard {} },
                PrimaryView::Admin => rsx! { Admin {} },
            }
        }
    }
}

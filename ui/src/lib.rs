//! Shared UI crate for the Universal Data Console. Cross-platform logic and
//! views live here; the `web` and `desktop` crates are thin launchers.

pub mod core;
pub mod views;

pub mod components {
    pub mod chart;
    pub mod history_overlay;
    pub mod menu;
    pub mod notice_banner;
    pub mod profile_overlay;
    pub mod stats;
    pub mod theme_toggle;

    pub use chart::DonutChart;
    pub use history_overlay::HistoryOverlay;
    pub use menu::MenuPanel;
    pub use notice_banner::NoticeBanner;
    pub use profile_overlay::ProfileOverlay;
    pub use stats::StatGrid;
    pub use theme_toggle::ThemeToggle;
}

mod app;
pub use app::App;

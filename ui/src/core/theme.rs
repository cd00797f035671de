//! Light/dark theme preference.
//!
//! The preference is deliberately session-only: the durable store is owned
//! exclusively by the history log, so a reload always starts light.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value for the shell's `data-theme` rendering attribute.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Fill for the donut chart's centre hole.
    pub fn chart_hole_color(self) -> &'static str {
        match self {
            Self::Light => "#e0e5ec",
            Self::Dark => "#292d32",
        }
    }
}

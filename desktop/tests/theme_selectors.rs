#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that CSS selectors the Rust components rely on (dashboard shell,
  donut chart, overlays, notices) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames a core class,
  preventing a silent styling regression in packaged desktop builds.

How it works:
- The theme is embedded at compile time with `include_str!`, mirroring how
  `ui/src/app.rs` inlines it.
- A curated set of selectors is checked by substring presence; a full CSS
  parser would add dependencies without catching more regressions.

If a selector is intentionally renamed:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".console-root",
    ".console-shell",
    ".console-header",
    // Theme switching
    "[data-theme=\"dark\"]",
    ".theme-toggle",
    // Buttons & shared controls
    ".button {",
    ".button--primary",
    ".button--confirm",
    ".button--ghost",
    ".field {",
    // Auth screens
    ".auth-screen",
    ".auth-card",
    // Dashboard widgets
    ".upload-area",
    ".stat-grid",
    ".stat-box--total",
    ".donut__svg",
    ".donut__legend",
    // Menu & overlays
    ".menu-panel",
    ".menu-panel__item--logout",
    ".overlay__card",
    ".history-list__item",
    // Notices
    ".notice--info",
    ".notice--error",
    // Admin
    ".user-table",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn light_and_dark_hole_colors_diverge() {
    // Both surface colors feed the donut hole; losing either breaks the chart
    // against one of the two themes.
    assert!(THEME_CSS.contains("#e0e5ec"));
    assert!(THEME_CSS.contains("#292d32"));
}

#![cfg(test)]
//! Ensures the shared theme embedded into the desktop build remains present
//! and non-trivial.
//!
//! The desktop binary inlines `ui/assets/theme/main.css` via `include_str!`
//! (through `ui::App`), so a truncated or relocated file would only surface
//! as unstyled UI at runtime. This test fails the build early instead.
//!
//! If the theme is intentionally renamed or moved, update both this test and
//! the `include_str!` constant in `ui/src/app.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    // Quick sanity tokens that should exist in our theme.
    let required = ["--color-bg", ".console-root", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

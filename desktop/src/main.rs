#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
#[cfg(any(feature = "desktop", feature = "server"))]
use dioxus::prelude::*;

#[cfg(feature = "desktop")]
fn main() {
    // Maximize on launch (dioxus-desktop 0.6.x: pass a WindowBuilder value).
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!(
                        "Universal Data Console – v{}",
                        env!("CARGO_PKG_VERSION")
                    ))
                    .with_maximized(true),
            ),
        )
        .launch(ui::App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(ui::App);
}

//! # client
//!
//! Leptos single-page UI for the starter app. Renders the API info and
//! health panels, a demo form, a confirmation modal, transient
//! notifications, and a persisted light/dark color scheme toggle.
//!
//! Browser-only code sits behind the `csr` feature; without it the crate
//! builds natively so state and helpers can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Install panic/log hooks and mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

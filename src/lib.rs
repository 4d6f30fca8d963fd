//! # portfolio
//!
//! Leptos + WASM single-page portfolio: theme toggle, responsive navbar,
//! works carousel, project detail modal, and contact form.
//!
//! This crate contains the page, its components, browser helpers, and the
//! network seams. Carousel, modal, and catalog logic comes from the `gallery`
//! crate so it can be tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

//! # client
//!
//! Leptos + WASM front-end for the Hala hospitality site.
//!
//! This crate contains pages, components, shared UI state, the translation
//! bundles, and the pure helpers (validation, calendar math, data tables)
//! the forms and the search widget are built on. The `hala-site` binary
//! renders it on the server; the `hydrate` feature builds the browser side.

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod data;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hala client hydrating");
    leptos::mount::hydrate_body(app::App);
}

//! # client
//!
//! Leptos + WASM frontend for the EventDesk console.
//!
//! This crate binds the `eventdesk` session core to the browser: role phases
//! live in reactive signals, records persist in `localStorage`, logins go out
//! over `gloo-net`, and the admin area is wrapped in route guards.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

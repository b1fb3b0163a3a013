//! # client
//!
//! Leptos + WASM frontend for gatehouse: signup, login and a token-gated
//! private page.
//!
//! This crate contains pages, components, the reactive auth state, the
//! `gloo-net` implementation of the auth API and the `localStorage` token
//! store. The flow logic itself lives in `authflow`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("console logger not installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}

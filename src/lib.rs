//! # fiszki-client
//!
//! Leptos + WASM frontend for a Polish flashcard language-learning app.
//! Students study Polish-to-French or Polish-to-English card sets; admins
//! manage groups and items and can generate content with an AI backend.
//!
//! The crate holds pages, components, shared client state, the REST types
//! and browser-environment glue. The HTTP backend is external; this crate
//! only consumes it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}

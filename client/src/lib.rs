//! # client
//!
//! Leptos + WASM admin dashboard for the game catalogue backend.
//!
//! This crate contains the router and shell chrome, the generic resource
//! list view, per-resource configuration, view state, and the REST fetch
//! layer. The `dashboard` host crate renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod resources;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

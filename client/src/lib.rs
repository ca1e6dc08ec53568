//! # client
//!
//! Leptos + WASM host for the classroom whiteboard and the geometry
//! visualizer. Built client-side rendered with the `csr` feature.
//!
//! This crate contains pages, components, panel state, and the HTTP call to
//! the animation generator. Drawing and playback live in the `canvas` crate;
//! components here own a `canvas::web::Whiteboard` or `canvas::web::Player`
//! and forward DOM events and generation results into it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("client started");
    leptos::mount::mount_to_body(app::App);
}

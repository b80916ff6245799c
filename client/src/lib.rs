//! # client
//!
//! Leptos + WASM frontend for the quiz map application.
//!
//! This crate contains pages, components, form and list state, and the
//! REST client for the remote quiz API. It integrates with the `map` crate
//! for Leaflet rendering via the `QuizMap` bridge component.
//!
//! Built with `hydrate` for the browser and `ssr` for the host's server
//! render; browser-only paths compile to no-ops under `ssr`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}

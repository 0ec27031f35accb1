//! Browser host for the portfolio page behaviors.
//!
//! The page logic lives in the `behavior` crate and never touches the DOM.
//! This crate reads the site config, resolves elements, wires listeners and
//! timers, and applies the mutations `behavior` returns.
//!
//! Everything that needs a browser is behind the `hydrate` feature so that
//! config parsing, storage fallbacks, and the particle config test natively.

#[cfg(feature = "hydrate")]
pub mod app;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod features;
pub mod particles;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::mount();
}

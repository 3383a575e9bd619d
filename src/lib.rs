//! Loomhouse Textiles - home textile showroom
//!
//! Catalog browsing, product galleries and lead capture for a textile
//! manufacturer, built with Leptos and WebAssembly. The `tools` feature adds
//! the offline image maintenance used by the `asset-tools` binary.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "tools")]
pub mod tools;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

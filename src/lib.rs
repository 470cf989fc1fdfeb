//! Sync - marketing landing page
//!
//! A scroll-driven landing page built with Leptos: the theme colour follows
//! scroll depth, sections reveal as they enter the viewport, and the hero
//! hosts a small chat simulation. `core` holds the browser-independent state
//! engine; `ui` binds it to the DOM.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

//! Rudy landing page frontend
//!
//! Leptos-based WASM frontend. Page copy, the waitlist workflow and the API
//! client trait live in `rudy-core`; this crate only renders and wires browser
//! side effects (timers, navigation, scrolling).

mod api;
mod app;
mod auth;
mod browser;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

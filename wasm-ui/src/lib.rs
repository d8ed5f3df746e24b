//! Web UI for denali-demo
//!
//! A Yew-based single-page app simulating the Denali data-engineer
//! assistant: ask a question, pick data sources, watch the plan run.

mod app;
mod components;
mod execution;
mod landing;
mod notebook_view;
mod sources;
pub mod state;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    yew::Renderer::<app::App>::new().render();
}

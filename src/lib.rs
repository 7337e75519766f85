//! EV Data Dashboard
//!
//! Fetches pre-computed chart descriptors from `/api/plots` once and renders
//! them as pie, bar and combo charts with a jump-to-section selector.
//!
//! - `core`: platform-agnostic descriptors, layout dispatch, pie geometry,
//!   navigation and fetch state (tested natively)
//! - `app`: the egui view (WASM)
//! - `fetch_native`: the CLI's reqwest client

pub mod config;
pub mod core;

#[cfg(all(not(target_arch = "wasm32"), feature = "cli"))]
pub mod fetch_native;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod fetch_wasm;
#[cfg(target_arch = "wasm32")]
mod theme;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id("canvas")
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::DashboardApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}

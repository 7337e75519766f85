//! Endpoint configuration
//!
//! The dashboard talks to a single URL. It can be overridden with the
//! `EV_PLOTS_URL` environment variable (CLI) or `window.__ev_plots_url`
//! (browser).

/// Default plots endpoint
pub const DEFAULT_PLOTS_URL: &str = "http://127.0.0.1:5000/api/plots";

/// Environment variable consulted by the CLI
pub const PLOTS_URL_ENV: &str = "EV_PLOTS_URL";

/// Global consulted in the browser
pub const PLOTS_URL_GLOBAL: &str = "__ev_plots_url";

/// Pick the override if it is non-blank, else the default
pub fn resolve_plots_url(override_url: Option<String>) -> String {
    override_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_PLOTS_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn plots_url_from_env() -> String {
    resolve_plots_url(std::env::var(PLOTS_URL_ENV).ok())
}

#[cfg(target_arch = "wasm32")]
pub fn plots_url_from_window() -> String {
    let override_url = web_sys::window().and_then(|w| {
        js_sys::Reflect::get(&w, &wasm_bindgen::JsValue::from_str(PLOTS_URL_GLOBAL))
            .ok()
            .and_then(|v| v.as_string())
    });
    resolve_plots_url(override_url)
}

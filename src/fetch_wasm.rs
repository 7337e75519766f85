//! WASM plots fetch using the browser's `fetch`

use std::cell::RefCell;
use std::rc::Weak;

use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::{parse_plots, DashboardState, FetchError, PlotDescriptor};

fn js_error(e: JsValue) -> FetchError {
    FetchError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// GET the plots endpoint and decode the body
pub async fn fetch_plots(url: &str) -> Result<Vec<PlotDescriptor>, FetchError> {
    info!(url, "Fetching plots");

    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;

    if !response.ok() {
        warn!(status = response.status(), "Plots endpoint returned an error status");
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = body
        .as_string()
        .ok_or_else(|| FetchError::Network("response body is not text".into()))?;

    parse_plots(&body)
}

/// Fire the one-shot fetch and commit the result into `state`
///
/// Only a weak handle is held, so a result arriving after the app is gone is
/// dropped instead of committed.
pub fn spawn_fetch(url: String, state: Weak<RefCell<DashboardState>>, ctx: egui::Context) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_plots(&url).await;

        let Some(state) = state.upgrade() else {
            debug!("Dashboard dropped before plots arrived, discarding");
            return;
        };
        state.borrow_mut().commit(result);
        ctx.request_repaint();
    });
}

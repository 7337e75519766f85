//! Native plots fetch for the CLI
//!
//! Uses reqwest on the caller's tokio runtime.

use tracing::{info, warn};

use crate::core::{parse_plots, FetchError, PlotDescriptor};

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

/// GET the plots endpoint and decode the body
pub async fn fetch_plots(url: &str) -> Result<Vec<PlotDescriptor>, FetchError> {
    info!(url, "Fetching plots");

    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), "Plots endpoint returned an error status");
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    parse_plots(&body)
}

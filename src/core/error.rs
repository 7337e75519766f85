//! Error type for acquiring plot descriptors

use thiserror::Error;

/// Failure while fetching or decoding the plots payload
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Body was not a JSON array of plot descriptors
    #[error("invalid plots payload: {0}")]
    Decode(#[from] serde_json::Error),
}

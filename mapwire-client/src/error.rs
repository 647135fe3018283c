//! Client error types.

use mapwire_core::CoreError;
use thiserror::Error;

/// Error type for client operations.
///
/// Transport and remote failures are kept apart: [`ClientError::Http`] is a
/// request that never completed, [`ClientError::Remote`] is a completed
/// exchange the gateway rejected. Only the CRUD helpers produce `Remote`;
/// cursor data calls surface non-2xx outcomes as ordinary results.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A URL could not be assembled from the request parts.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The gateway rejected the request with a non-2xx status.
    #[error("Remote error ({status}): {message}")]
    Remote {
        /// HTTP status code the gateway answered with.
        status: u16,
        /// The remote-provided message.
        message: String,
    },
}

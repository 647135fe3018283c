//! Core error types for the Mapwire SDK.

use thiserror::Error;

/// Core error type for Mapwire SDK operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A configuration call received a malformed argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An HTTP verb outside the canonical method registry.
    #[error("Unsupported HTTP verb: {0}")]
    UnsupportedMethod(String),

    /// A cursor was invoked before an endpoint was set.
    #[error("The endpoint to call was not specified")]
    NotConfigured,

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid data in an API response.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

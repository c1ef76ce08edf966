//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the registry service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not complete (timeout, connection refused, DNS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code returned by the registry.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

//! Error types for the zmarks plugin.
//!
//! [`ZmarksError`] is the single error type used across the crate, with a
//! [`Result`] alias for convenience. Variants are derived with `thiserror`.

use thiserror::Error;

/// The main error type for zmarks operations.
///
/// Request and response failures are the common case: the host delivers a
/// status code and a body, and anything that cannot be turned into the
/// expected JSON shape ends up here.
///
/// # Examples
///
/// ```
/// use zmarks::ZmarksError;
///
/// let err = ZmarksError::Transport { status: 503, message: "unavailable".to_string() };
/// assert_eq!(err.to_string(), "Request failed with status 503: unavailable");
/// ```
#[derive(Debug, Error)]
pub enum ZmarksError {
    /// The request did not complete.
    ///
    /// The Zellij host reports connection failures as a status code with the
    /// underlying error text as the body.
    #[error("Request failed with status {status}: {message}")]
    Transport {
        /// Status reported by the host.
        status: u16,
        /// Response body, lossily decoded.
        message: String,
    },

    /// The response body could not be parsed into the expected shape.
    #[error("Malformed response for {operation}: {source}")]
    Decode {
        /// Name of the API operation whose response failed to parse.
        operation: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zmarks operations.
pub type Result<T> = std::result::Result<T, ZmarksError>;

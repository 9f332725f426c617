//! Client error types.

use thiserror::Error;

/// Client error type.
///
/// Every variant is fatal to the run; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport failed (DNS, connect, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The status URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The endpoint answered with a status code other than 200.
    #[error("HTTP response code is {0}")]
    Status(String),

    /// The response body was not a valid check report.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this is a non-200 response error.
    pub fn is_status(&self) -> bool {
        matches!(self, Error::Status(_))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

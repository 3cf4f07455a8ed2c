//! Upstream error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the marketplace API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Base URL could not be parsed.
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    /// Base URL parsed but cannot carry path segments.
    #[error("upstream URL '{0}' cannot be used as a base")]
    NotABase(String),

    /// Connection, TLS or protocol failure.
    #[error("request to upstream failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned {status} for {url}")]
    Status { url: String, status: StatusCode },

    /// Body was not the expected JSON.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UpstreamError::Status {
            url: "http://upstream/items/MLA1".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "upstream returned 404 Not Found for http://upstream/items/MLA1"
        );

        let err = UpstreamError::NotABase("mailto:x@y".to_string());
        assert!(err.to_string().contains("mailto:x@y"));
    }
}

//! Front-end error types.
//!
//! - [`FetchError`] - network/fetch failures for HTTP requests

use thiserror::Error;

/// Fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create request object
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// URL could not be built from its parts
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Network error during fetch
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx status
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response body")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    /// Body was not the expected JSON shape
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(String),
    /// No response within the timeout
    #[error("Request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }
}

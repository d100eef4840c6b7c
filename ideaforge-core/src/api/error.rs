//! Error types for backend API calls
//!
//! Strongly-typed errors for the platform client, using thiserror for the
//! trait implementations. Failures are terminal for the one call that hit
//! them; no retry logic lives at this layer.

use thiserror::Error;

/// Main error type for backend API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure before a response arrived
    #[error("Network error: {message}")]
    Network { message: String },

    /// Non-success HTTP status without a usable envelope
    #[error("API error (status {status}): {message}")]
    Http { status: u16, message: String },

    /// The backend answered with `success: false`
    #[error("Request rejected: {message}")]
    Backend { message: String },

    /// Response body did not match the expected envelope
    #[error("Parsing error: {message}")]
    Parse { message: String },

    /// Client-side configuration problem
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ApiError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Create an HTTP status error
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http { status, message: message.into() }
    }

    /// Create a backend-rejection error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend { message: message.into() }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}

/// Result type for backend API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Http { status: status.as_u16(), message: err.to_string() },
            None if err.is_decode() => Self::Parse { message: err.to_string() },
            None => Self::Network { message: err.to_string() },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::backend("title already taken");
        assert_eq!(err.to_string(), "Request rejected: title already taken");

        let err = ApiError::http(500, "internal error");
        assert!(err.to_string().contains("status 500"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let api_err: ApiError = json_err.into();
        assert!(matches!(api_err, ApiError::Parse { .. }));
    }
}

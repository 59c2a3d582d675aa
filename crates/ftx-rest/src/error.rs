//! Error types for REST API operations

use reqwest::StatusCode;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Missing or malformed parameters, detected before any network call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The exchange answered with HTTP 429
    #[error("Too many requests")]
    RateLimited,

    /// Transport failure, non-2xx status, or undecodable response
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl RestError {
    /// Shorthand for an `InvalidArgument` error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Shorthand for a `RequestFailed` error
    pub fn failed(message: impl Into<String>) -> Self {
        Self::RequestFailed(message.into())
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    /// Check if this error was raised by local parameter validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.status() == Some(StatusCode::TOO_MANY_REQUESTS) {
            Self::RateLimited
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_message() {
        let err = RestError::RateLimited;
        assert_eq!(err.to_string(), "Too many requests");
        assert!(err.is_rate_limited());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_request_failed_keeps_message() {
        let err = RestError::failed("connection reset by peer");
        assert!(err.to_string().contains("connection reset by peer"));
        assert!(matches!(err, RestError::RequestFailed(ref m) if m == "connection reset by peer"));
    }

    #[test]
    fn test_invalid_argument() {
        let err = RestError::invalid("depth must be between 20 and 100");
        assert!(err.is_invalid_argument());
        assert!(err.to_string().starts_with("Invalid argument"));
    }
}

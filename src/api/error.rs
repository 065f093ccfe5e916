//! API Error Types
//!
//! The client only distinguishes "ok" from "not ok". Views collapse every
//! variant into a static message; the detail is kept for the console log.

use thiserror::Error;

/// Errors returned by [`Backend`](super::Backend) operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection refused)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered outside the 2xx range
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// The request body could not be serialized
    #[error("Request build error: {0}")]
    Encode(String),

    /// The response body was not the expected JSON
    #[error("Parse error: {0}")]
    Decode(String),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::Status { status: 400 };
        assert_eq!(err.to_string(), "Request failed with status 400");
    }
}

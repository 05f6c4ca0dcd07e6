//! HTTP-level error types for the monday.com API SDK.
//!
//! # Error Handling
//!
//! - [`HttpError`]: the request never produced a response (connection,
//!   TLS, or timeout failure)
//! - [`HttpResponseError`]: a non-2xx response whose body carried no
//!   GraphQL error payload
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_api::clients::{HttpClient, HttpError};
//!
//! match client.post_json(&body).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::Timeout { timeout }) => {
//!         println!("Gave up after {:?}", timeout);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error returned for a non-successful response that is not a GraphQL
/// error envelope.
///
/// # Example
///
/// ```rust
/// use monday_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 502,
///     message: "Bad Gateway".to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, truncated for display.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when a request produced no HTTP response.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection, TLS, or protocol failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        /// The timeout that elapsed.
        timeout: Duration,
    },
}

impl HttpError {
    /// Classifies a `reqwest` failure, separating timeouts from other
    /// network errors.
    pub(crate) fn from_reqwest(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            Self::Timeout { timeout }
        } else {
            Self::Network(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_message() {
        let error = HttpResponseError {
            code: 500,
            message: "Internal Server Error".to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_timeout_error_message() {
        let error = HttpError::Timeout {
            timeout: Duration::from_secs(5),
        };
        let message = error.to_string();
        assert!(message.contains("timed out"));
        assert!(message.contains("5s"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            error_reference: None,
        };
        let _ = response_error;

        let timeout: &dyn std::error::Error = &HttpError::Timeout {
            timeout: Duration::from_secs(1),
        };
        let _ = timeout;
    }
}

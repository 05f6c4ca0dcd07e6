//! Error types for the monday.com API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use monday_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid monday.com API token.")]
    EmptyApiToken,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.monday.com/v2').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-10').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The request timeout must be non-zero.
    #[error("Request timeout must be greater than zero.")]
    ZeroTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_token_error_message() {
        let message = ConfigError::EmptyApiToken.to_string();
        assert!(message.contains("API token cannot be empty"));
        assert!(message.contains("monday.com"));
    }

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            url: "api.monday.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("api.monday.com"));
        assert!(message.contains("with scheme"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_token" };
        let message = error.to_string();
        assert!(message.contains("api_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::ZeroTimeout;
        let _: &dyn std::error::Error = &error;
    }
}

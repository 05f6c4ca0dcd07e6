//! Configuration types for the monday.com API SDK.
//!
//! This module provides the configuration used to initialize the SDK's
//! HTTP transport and request dispatcher.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MondayConfig`]: The configuration struct holding all SDK settings
//! - [`MondayConfigBuilder`]: A builder for constructing [`MondayConfig`] instances
//! - [`ApiToken`]: A validated API token with masked debug output
//! - [`EndpointUrl`]: A validated GraphQL endpoint URL
//! - [`ApiVersion`]: The value sent in the `API-Version` header
//! - [`RateLimitPolicy`]: Which responses are classified as rate limited
//!
//! # Example
//!
//! ```rust
//! use monday_api::{MondayConfig, ApiToken, ApiVersion};
//!
//! let config = MondayConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::V2024_10)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod rate_limit;
mod version;

pub use newtypes::{ApiToken, EndpointUrl};
pub use rate_limit::{RateLimitPolicy, DEFAULT_RATE_LIMIT_ERROR_CODES};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the monday.com API SDK.
///
/// # Thread Safety
///
/// `MondayConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use monday_api::{MondayConfig, ApiToken, EndpointUrl};
/// use std::time::Duration;
///
/// let config = MondayConfig::builder()
///     .api_token(ApiToken::new("my-token").unwrap())
///     .endpoint(EndpointUrl::new("http://localhost:8080/v2").unwrap())
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint().as_ref(), "http://localhost:8080/v2");
/// assert!(config.api_version().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct MondayConfig {
    api_token: ApiToken,
    endpoint: EndpointUrl,
    api_version: Option<ApiVersion>,
    timeout: Duration,
    user_agent_prefix: Option<String>,
    rate_limit: RateLimitPolicy,
}

impl MondayConfig {
    /// Creates a new builder for constructing a `MondayConfig`.
    #[must_use]
    pub fn builder() -> MondayConfigBuilder {
        MondayConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the API version, if one is pinned.
    ///
    /// When `None`, no `API-Version` header is sent and the server picks
    /// its current default.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the rate-limit classification policy.
    #[must_use]
    pub const fn rate_limit(&self) -> &RateLimitPolicy {
        &self.rate_limit
    }
}

// Verify MondayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MondayConfig>();
};

/// Builder for constructing [`MondayConfig`] instances.
///
/// The only required field is `api_token`.
///
/// # Defaults
///
/// - `endpoint`: `https://api.monday.com/v2`
/// - `api_version`: `None` (no `API-Version` header)
/// - `timeout`: 60 seconds
/// - `user_agent_prefix`: `None`
/// - `rate_limit`: [`RateLimitPolicy::default`]
#[derive(Debug, Default)]
pub struct MondayConfigBuilder {
    api_token: Option<ApiToken>,
    endpoint: Option<EndpointUrl>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    rate_limit: Option<RateLimitPolicy>,
}

impl MondayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Pins the API version sent in the `API-Version` header.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        if let Some(previous) = &self.api_version {
            tracing::debug!(
                "Overriding configured API version {} with {}",
                previous,
                version
            );
        }
        self.api_version = Some(version);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Replaces the rate-limit classification policy.
    #[must_use]
    pub fn rate_limit(mut self, policy: RateLimitPolicy) -> Self {
        self.rate_limit = Some(policy);
        self
    }

    /// Builds the [`MondayConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` is not
    /// set, or [`ConfigError::ZeroTimeout`] if the timeout is zero.
    pub fn build(self) -> Result<MondayConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(MondayConfig {
            api_token,
            endpoint: self.endpoint.unwrap_or_default(),
            api_version: self.api_version,
            timeout,
            user_agent_prefix: self.user_agent_prefix,
            rate_limit: self.rate_limit.unwrap_or_default(),
        })
    }
}

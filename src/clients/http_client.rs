//! HTTP transport for the monday.com GraphQL endpoint.
//!
//! This module provides the [`HttpClient`] type, which sends one
//! authenticated JSON POST per call and hands back the raw response.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::MondayConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the configured GraphQL endpoint.
///
/// The client handles:
/// - Default headers including User-Agent, `Authorization`, and `API-Version`
/// - The per-request timeout
/// - Response header and body capture
///
/// It does not interpret status codes and never retries; classification
/// is the dispatcher's job.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The inner `reqwest::Client` pools
/// connections and is safe for concurrent in-flight requests.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use monday_api::{ApiToken, MondayConfig};
    /// use monday_api::clients::HttpClient;
    ///
    /// let config = MondayConfig::builder()
    ///     .api_token(ApiToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.endpoint(), "https://api.monday.com/v2");
    /// ```
    #[must_use]
    pub fn new(config: &MondayConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}monday API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.api_token().as_ref().to_string(),
        );
        if let Some(version) = config.api_version() {
            default_headers.insert("API-Version".to_string(), version.to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint().as_ref().to_string(),
            timeout: config.timeout(),
            default_headers,
        }
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// POSTs a JSON body to the endpoint.
    ///
    /// Any HTTP status, including 4xx and 5xx, is returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Timeout`] if the configured timeout elapses and
    /// [`HttpError::Network`] for connection, TLS, or body read failures.
    pub async fn post_json(&self, body: &serde_json::Value) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| HttpError::from_reqwest(e, self.timeout))?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let text = res
            .text()
            .await
            .map_err(|e| HttpError::from_reqwest(e, self.timeout))?;

        let response = HttpResponse::new(code, headers, text);
        tracing::debug!(
            status = code,
            request_id = response.request_id().unwrap_or("-"),
            "Received response from {}",
            self.endpoint
        );

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, ApiVersion};

    fn config_builder() -> crate::config::MondayConfigBuilder {
        MondayConfig::builder().api_token(ApiToken::new("test-token").unwrap())
    }

    #[test]
    fn test_client_uses_configured_endpoint_and_timeout() {
        let config = config_builder()
            .endpoint(crate::config::EndpointUrl::new("http://localhost:9999/v2").unwrap())
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(client.endpoint(), "http://localhost:9999/v2");
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_authorization_header_carries_token() {
        let client = HttpClient::new(&config_builder().build().unwrap());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"test-token".to_string())
        );
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_api_version_header_only_when_configured() {
        let client = HttpClient::new(&config_builder().build().unwrap());
        assert!(client.default_headers().get("API-Version").is_none());

        let config = config_builder()
            .api_version(ApiVersion::V2024_10)
            .build()
            .unwrap();
        let client = HttpClient::new(&config);
        assert_eq!(
            client.default_headers().get("API-Version"),
            Some(&"2024-10".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&config_builder().build().unwrap());
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("monday API Library v"));
        assert!(user_agent.contains("Rust"));

        let config = config_builder().user_agent_prefix("MyApp/1.0").build().unwrap();
        let client = HttpClient::new(&config);
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | monday API Library"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}

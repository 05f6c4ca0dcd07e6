//! GraphQL request dispatcher for the monday.com API.
//!
//! This module provides the [`GraphqlClient`] type, which sends a GraphQL
//! document and classifies the outcome into data or a [`GraphqlError`].

use serde::de::DeserializeOwned;

use crate::clients::graphql::errors::{ApiErrorEntry, GraphqlError, TransportError};
use crate::clients::{HttpClient, HttpResponse, HttpResponseError};
use crate::config::{MondayConfig, RateLimitPolicy};
use crate::query::QueryDocument;

/// Result of one dispatched GraphQL request.
pub type ApiResult<T = serde_json::Value> = Result<T, GraphqlError>;

/// Maximum number of body characters kept in a status error message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// GraphQL client for the monday.com API.
///
/// Each call performs exactly one request/response cycle. The client never
/// retries or waits; a [`GraphqlError::RateLimited`] result tells the
/// caller to back off.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async
/// tasks. Calls hold no shared mutable state.
///
/// # Example
///
/// ```rust,ignore
/// use monday_api::{ApiToken, GraphqlClient, MondayConfig};
///
/// let config = MondayConfig::builder()
///     .api_token(ApiToken::new("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = GraphqlClient::new(&config);
/// let data = client.dispatch("query { me { id name } }").await?;
/// println!("Hello, {}", data["me"]["name"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
    rate_limit: RateLimitPolicy,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from the configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created; see
    /// [`HttpClient::new`].
    #[must_use]
    pub fn new(config: &MondayConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            rate_limit: config.rate_limit().clone(),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the rate-limit classification policy.
    #[must_use]
    pub const fn rate_limit_policy(&self) -> &RateLimitPolicy {
        &self.rate_limit
    }

    /// Sends a GraphQL document and returns its `data` payload.
    ///
    /// The document is sent exactly as given, as the `query` field of the
    /// JSON request body.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Transport`] for network failures, timeouts,
    ///   non-2xx responses without an error payload, and malformed bodies
    /// - [`GraphqlError::RateLimited`] for rate-limit statuses or error codes
    /// - [`GraphqlError::Api`] when the body carries an `errors` payload
    pub async fn dispatch(&self, document: &str) -> ApiResult {
        self.dispatch_with_variables(document, None).await
    }

    /// Sends a GraphQL document with optional variables.
    ///
    /// `variables` is omitted from the request body when `None`.
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::dispatch`].
    pub async fn dispatch_with_variables(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> ApiResult {
        let response = self.round_trip(document, variables).await?;
        self.classify(&response)
    }

    /// Renders and sends a [`QueryDocument`].
    ///
    /// Rendering errors are returned before any network call is made.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Query`] if the document cannot be rendered,
    /// otherwise see [`GraphqlClient::dispatch`].
    pub async fn execute(&self, document: &QueryDocument) -> ApiResult {
        let text = document.render()?;
        self.dispatch(&text).await
    }

    /// Renders and sends a [`QueryDocument`], deserializing `data` into `T`.
    ///
    /// # Errors
    ///
    /// As [`GraphqlClient::execute`]; a `data` payload that does not fit
    /// `T` is reported as [`TransportError::MalformedResponse`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// #[derive(serde::Deserialize)]
    /// struct Me { me: User }
    ///
    /// let document = QueryDocument::query().field(FieldSpec::nested("me", ["id", "name"]));
    /// let me: Me = client.execute_as(&document).await?;
    /// ```
    pub async fn execute_as<T: DeserializeOwned>(&self, document: &QueryDocument) -> ApiResult<T> {
        let text = document.render()?;
        let response = self.round_trip(&text, None).await?;
        let data = self.classify(&response)?;

        serde_json::from_value(data).map_err(|e| {
            TransportError::MalformedResponse {
                code: response.code,
                reason: format!("`data` does not match the expected shape: {e}"),
            }
            .into()
        })
    }

    async fn round_trip(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<HttpResponse, GraphqlError> {
        let mut body = serde_json::Map::new();
        body.insert("query".to_string(), serde_json::Value::from(document));
        if let Some(variables) = variables {
            body.insert("variables".to_string(), variables);
        }

        tracing::debug!(
            endpoint = self.http_client.endpoint(),
            bytes = document.len(),
            "Dispatching GraphQL document"
        );

        Ok(self
            .http_client
            .post_json(&serde_json::Value::Object(body))
            .await?)
    }

    /// Maps an HTTP response onto data or a classified error.
    pub(crate) fn classify(&self, response: &HttpResponse) -> ApiResult {
        let code = response.code;
        let body = response.body.as_ref();
        let errors = body.and_then(extract_errors);

        if self.rate_limit.is_rate_limited_status(code) {
            let errors = errors.unwrap_or_default();
            let retry_after = response
                .retry_after()
                .or_else(|| errors.iter().find_map(ApiErrorEntry::retry_in));
            tracing::warn!(status = code, ?retry_after, "Request was rate limited");
            return Err(GraphqlError::RateLimited {
                status: code,
                retry_after,
                errors,
            });
        }

        if let Some(errors) = errors {
            let rate_limited = errors.iter().any(|e| {
                e.code
                    .as_deref()
                    .is_some_and(|c| self.rate_limit.is_rate_limited_code(c))
            });
            if rate_limited {
                let retry_after = response
                    .retry_after()
                    .or_else(|| errors.iter().find_map(ApiErrorEntry::retry_in));
                tracing::warn!(status = code, ?retry_after, "Request was rate limited");
                return Err(GraphqlError::RateLimited {
                    status: code,
                    retry_after,
                    errors,
                });
            }

            tracing::debug!(status = code, count = errors.len(), "API returned errors");
            let data = body
                .and_then(|b| b.get("data"))
                .filter(|d| !d.is_null())
                .cloned();
            return Err(GraphqlError::Api {
                status: code,
                errors,
                data,
            });
        }

        if !response.is_ok() {
            return Err(TransportError::Status(HttpResponseError {
                code,
                message: response.text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
                error_reference: response.request_id().map(String::from),
            })
            .into());
        }

        match body.and_then(|b| b.get("data")) {
            Some(data) if !data.is_null() => {
                tracing::debug!(status = code, "GraphQL request succeeded");
                Ok(data.clone())
            }
            found => {
                let reason = match (body, found) {
                    (None, _) => "response body is not JSON",
                    (Some(_), Some(_)) => "`data` is null and no `errors` were returned",
                    (Some(_), None) => "response has neither `data` nor `errors`",
                };
                tracing::warn!(status = code, reason, "Malformed GraphQL response");
                Err(TransportError::MalformedResponse {
                    code,
                    reason: reason.to_string(),
                }
                .into())
            }
        }
    }
}

/// Extracts error entries from a response body, if it carries any.
fn extract_errors(body: &serde_json::Value) -> Option<Vec<ApiErrorEntry>> {
    match body.get("errors") {
        Some(serde_json::Value::Array(entries)) if !entries.is_empty() => {
            Some(entries.iter().map(ApiErrorEntry::from_value).collect())
        }
        Some(serde_json::Value::Array(_) | serde_json::Value::Null) | None => {
            ApiErrorEntry::from_legacy(body).map(|entry| vec![entry])
        }
        Some(other) => Some(vec![ApiErrorEntry::from_value(other)]),
    }
}

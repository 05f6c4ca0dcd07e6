//! GraphQL dispatch error types for the monday.com API SDK.
//!
//! Every dispatched request resolves to either the `data` payload or one
//! [`GraphqlError`]:
//!
//! - [`GraphqlError::Query`]: the document could not be built (no request sent)
//! - [`GraphqlError::Transport`]: no usable response (network, timeout,
//!   non-2xx without an error payload, or a malformed body)
//! - [`GraphqlError::Api`]: the API answered with an `errors` payload
//! - [`GraphqlError::RateLimited`]: an API error the caller may back off on
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_api::clients::graphql::GraphqlError;
//!
//! match client.dispatch("query { me { id } }").await {
//!     Ok(data) => println!("{}", data["me"]["id"]),
//!     Err(GraphqlError::RateLimited { retry_after, .. }) => {
//!         println!("Backing off for {:?}", retry_after);
//!     }
//!     Err(GraphqlError::Api { errors, .. }) => {
//!         for error in errors {
//!             println!("{}", error);
//!         }
//!     }
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::{HttpError, HttpResponseError};
use crate::query::QueryError;

/// One segment of an error `path`: a field name or a list index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A list index.
    Index(u64),
    /// A field name or alias.
    Key(String),
}

/// One entry of a GraphQL `errors` payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApiErrorEntry {
    /// Human-readable error message.
    pub message: String,
    /// Machine-readable code, from `extensions.code` or `error_code`.
    pub code: Option<String>,
    /// Path to the field that failed, when the API reported one.
    pub path: Option<Vec<PathSegment>>,
    /// The raw `extensions` object.
    pub extensions: Option<serde_json::Value>,
}

impl ApiErrorEntry {
    /// Creates a message-only entry.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            path: None,
            extensions: None,
        }
    }

    /// Sets the error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Builds an entry from one element of an `errors` array.
    ///
    /// Bare strings become message-only entries. Objects without a
    /// `message` keep their JSON text as the message so nothing is lost.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::new(value.as_str().map_or_else(|| value.to_string(), String::from));
        };

        let message = object
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| value.to_string(), String::from);
        let extensions = object.get("extensions").cloned();
        let code = extensions
            .as_ref()
            .and_then(|ext| ext.get("code").or_else(|| ext.get("error_code")))
            .or_else(|| object.get("error_code"))
            .and_then(serde_json::Value::as_str)
            .map(String::from);
        let path = object
            .get("path")
            .and_then(|path| serde_json::from_value(path.clone()).ok());

        Self {
            message,
            code,
            path,
            extensions,
        }
    }

    /// Builds an entry from monday's legacy top-level envelope
    /// (`error_code`, `error_message`, `error_data`).
    pub(crate) fn from_legacy(body: &serde_json::Value) -> Option<Self> {
        let code = body.get("error_code").and_then(serde_json::Value::as_str);
        let message = body.get("error_message").and_then(serde_json::Value::as_str);
        if code.is_none() && message.is_none() {
            return None;
        }

        Some(Self {
            message: message.or(code).unwrap_or_default().to_string(),
            code: code.map(String::from),
            path: None,
            extensions: body.get("error_data").cloned(),
        })
    }

    /// Returns the `retry_in_seconds` hint from `extensions`, if any.
    #[must_use]
    pub fn retry_in(&self) -> Option<Duration> {
        self.extensions
            .as_ref()?
            .get("retry_in_seconds")?
            .as_f64()
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

impl fmt::Display for ApiErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Error for a request that produced no usable GraphQL response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No HTTP response was received.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A non-2xx response without a GraphQL error payload.
    #[error(transparent)]
    Status(#[from] HttpResponseError),

    /// A response whose body has neither usable `data` nor `errors`.
    #[error("Malformed response (HTTP {code}): {reason}")]
    MalformedResponse {
        /// The HTTP status code.
        code: u16,
        /// What was wrong with the body.
        reason: String,
    },
}

/// Error type for GraphQL dispatch.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The document could not be built; nothing was sent.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The request failed below the GraphQL layer.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API rejected the operation or reported domain errors.
    #[error("GraphQL API error (HTTP {status}): {}", join_messages(.errors))]
    Api {
        /// The HTTP status code.
        status: u16,
        /// Error entries, in the order the API returned them.
        errors: Vec<ApiErrorEntry>,
        /// Partial `data`, if the API returned any alongside the errors.
        data: Option<serde_json::Value>,
    },

    /// The API refused the request for rate or complexity limits.
    #[error("Rate limited (HTTP {status}){}", rate_limit_detail(.retry_after, .errors))]
    RateLimited {
        /// The HTTP status code.
        status: u16,
        /// How long the API asked the caller to wait, if it said.
        retry_after: Option<Duration>,
        /// Error entries, possibly empty for a bare 429.
        errors: Vec<ApiErrorEntry>,
    },
}

impl From<HttpError> for GraphqlError {
    fn from(error: HttpError) -> Self {
        Self::Transport(TransportError::Http(error))
    }
}

impl GraphqlError {
    /// Returns `true` for [`GraphqlError::RateLimited`].
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Returns `true` for errors reported by the API itself, including
    /// rate limiting.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::RateLimited { .. })
    }

    /// Returns `true` for transport failures.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the API error entries, empty for local and transport errors.
    #[must_use]
    pub fn api_errors(&self) -> &[ApiErrorEntry] {
        match self {
            Self::Api { errors, .. } | Self::RateLimited { errors, .. } => errors.as_slice(),
            _ => &[],
        }
    }

    /// Returns the suggested wait before retrying a rate-limited request.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

fn join_messages(errors: &[ApiErrorEntry]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn rate_limit_detail(retry_after: &Option<Duration>, errors: &[ApiErrorEntry]) -> String {
    let mut detail = String::new();
    if let Some(wait) = retry_after {
        detail.push_str(&format!(", retry after {wait:?}"));
    }
    if !errors.is_empty() {
        detail.push_str(": ");
        detail.push_str(&join_messages(errors));
    }
    detail
}

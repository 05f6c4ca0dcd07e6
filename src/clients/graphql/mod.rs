//! GraphQL request dispatch for the monday.com API.
//!
//! This module provides the request dispatcher built on top of the
//! [`HttpClient`](crate::clients::HttpClient): it sends one document per
//! call and classifies the response.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: sends raw documents or [`QueryDocument`](crate::query::QueryDocument)s
//! - [`GraphqlError`]: the classified failure of a dispatch
//! - [`ApiErrorEntry`]: one entry of an `errors` payload
//! - [`ApiResult`]: `Result` alias returned by every dispatch
//!
//! # Classification
//!
//! Responses are classified in this order:
//!
//! 1. No response (connection failure or timeout): [`TransportError::Http`]
//! 2. A rate-limit status (429 by default): [`GraphqlError::RateLimited`]
//! 3. An `errors` payload or legacy `error_code` envelope, at any status:
//!    [`GraphqlError::RateLimited`] when an entry carries a rate-limit code,
//!    otherwise [`GraphqlError::Api`]
//! 4. Any other non-2xx status: [`TransportError::Status`]
//! 5. A 2xx response with non-null `data`: `Ok(data)`
//! 6. Anything else: [`TransportError::MalformedResponse`]
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_api::{ApiToken, GraphqlClient, MondayConfig};
//! use monday_api::query::{ArgMap, FieldSpec, QueryDocument};
//!
//! let config = MondayConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = GraphqlClient::new(&config);
//!
//! // Raw document
//! let data = client.dispatch("query { me { id } }").await?;
//!
//! // Built document
//! let document = QueryDocument::query().field(
//!     FieldSpec::nested("boards", ["id", "name"]).with_args(ArgMap::new().arg("limit", 5)),
//! );
//! let data = client.execute(&document).await?;
//! ```

mod client;
mod errors;

pub use client::{ApiResult, GraphqlClient};
pub use errors::{ApiErrorEntry, GraphqlError, PathSegment, TransportError};

//! HTTP transport and GraphQL dispatch for the monday.com API.
//!
//! # Overview
//!
//! - [`HttpClient`]: sends one authenticated JSON POST to the endpoint
//! - [`HttpResponse`]: status, headers, and body of a response
//! - [`HttpError`] and [`HttpResponseError`]: transport-level failures
//! - [`graphql::GraphqlClient`]: the request dispatcher
//! - [`graphql::GraphqlError`]: classified dispatch errors
//!
//! # Retry Behavior
//!
//! Nothing in this module retries. A rate-limited response surfaces as
//! [`graphql::GraphqlError::RateLimited`] with the server's suggested
//! delay, and the caller decides whether to wait and resend.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{ApiResult, GraphqlClient, GraphqlError};

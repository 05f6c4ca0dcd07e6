//! # monday.com API Rust SDK
//!
//! A Rust SDK for the monday.com GraphQL API: build query and mutation
//! documents from loosely-typed arguments, send them, and get back either
//! the `data` payload or a classified error.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MondayConfig`] and [`MondayConfigBuilder`]
//! - Validated newtypes for the API token and endpoint
//! - GraphQL document construction via the [`query`] module
//! - An async request dispatcher, [`GraphqlClient`], that separates API
//!   errors, rate limiting, and transport failures
//! - Column and item operations via [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use monday_api::{ApiToken, ApiVersion, MondayConfig};
//!
//! let config = MondayConfig::builder()
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Building Documents
//!
//! ```rust
//! use monday_api::query::{format_args, format_select, ArgMap, ArgValue, FieldSpec};
//!
//! let args = ArgMap::new()
//!     .arg("board_id", 1234)
//!     .arg("item_name", "Write docs")
//!     .arg("state", ArgValue::raw("active"));
//! assert_eq!(
//!     format_args(&args).unwrap(),
//!     r#"(board_id: 1234, item_name: "Write docs", state: active)"#
//! );
//!
//! let select = vec![
//!     FieldSpec::leaf("id"),
//!     FieldSpec::nested("column_values", ["id", "text"]),
//! ];
//! assert_eq!(format_select(&select).unwrap(), "id column_values { id text }");
//! ```
//!
//! ## Dispatching
//!
//! ```rust,ignore
//! use monday_api::{GraphqlClient, GraphqlError};
//!
//! let client = GraphqlClient::new(&config);
//!
//! match client.dispatch("query { boards(limit: 1) { id name } }").await {
//!     Ok(data) => println!("{}", data["boards"][0]["name"]),
//!     Err(GraphqlError::RateLimited { retry_after, .. }) => {
//!         // back off, then resend
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction and documents
//!   are rendered before anything is sent
//! - **Thread-safe**: All types are `Send + Sync`
//! - **One request per call**: The dispatcher never retries or sleeps

pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{
    ApiToken, ApiVersion, EndpointUrl, MondayConfig, MondayConfigBuilder, RateLimitPolicy,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::graphql::{ApiErrorEntry, TransportError};
pub use clients::{
    ApiResult, GraphqlClient, GraphqlError, HttpClient, HttpError, HttpResponse,
    HttpResponseError,
};

// Re-export document construction types
pub use query::{ArgMap, ArgValue, FieldSpec, OperationKind, QueryDocument, QueryError};

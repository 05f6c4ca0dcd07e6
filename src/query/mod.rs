//! GraphQL document construction.
//!
//! This module turns loosely-typed caller input into GraphQL text. It is
//! purely syntactic: nothing is checked against the remote schema.
//!
//! # Overview
//!
//! - [`ArgValue`]: a dynamically-typed argument value
//! - [`ArgMap`] and [`format_args`]: named arguments, `(name: value, ...)`
//! - [`FieldSpec`] and [`format_select`]: selection sets, nested to any depth
//! - [`QueryDocument`] and [`assemble`]: complete `query` / `mutation` documents
//! - [`QueryError`]: local construction failures
//!
//! # Example
//!
//! ```rust
//! use monday_api::query::{assemble, ArgMap, ArgValue, FieldSpec, OperationKind};
//!
//! let args = ArgMap::new()
//!     .arg("board_id", 1234)
//!     .arg("title", "Status")
//!     .arg("column_type", ArgValue::raw("status"));
//!
//! let document = assemble(
//!     OperationKind::Mutation,
//!     "create_column",
//!     &args,
//!     &FieldSpec::list(&["id", "title"]),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     document,
//!     r#"mutation { create_column(board_id: 1234, title: "Status", column_type: status) { id title } }"#
//! );
//! ```

mod args;
mod document;
mod errors;
mod selection;
mod value;

pub use args::{format_args, ArgMap};
pub use document::{assemble, OperationKind, QueryDocument};
pub use errors::QueryError;
pub use selection::{format_select, FieldSpec};
pub use value::ArgValue;

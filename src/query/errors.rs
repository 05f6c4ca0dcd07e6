//! Errors raised while building a GraphQL document.
//!
//! These are local failures: they are reported before any network call is
//! made.

use thiserror::Error;

/// Error type for query construction.
///
/// # Example
///
/// ```rust
/// use monday_api::query::{format_select, QueryError};
///
/// let result = format_select(&[]);
/// assert!(matches!(result, Err(QueryError::InvalidSelection { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The requested field list cannot form a GraphQL selection set.
    #[error("Invalid selection: {reason}")]
    InvalidSelection {
        /// Why the selection was rejected.
        reason: String,
    },

    /// An argument value has no GraphQL literal representation.
    #[error("Cannot serialize argument: {reason}")]
    ArgumentSerialization {
        /// Why the value was rejected.
        reason: String,
    },
}

impl QueryError {
    pub(crate) fn invalid_selection(reason: impl Into<String>) -> Self {
        Self::InvalidSelection {
            reason: reason.into(),
        }
    }

    pub(crate) fn argument(reason: impl Into<String>) -> Self {
        Self::ArgumentSerialization {
            reason: reason.into(),
        }
    }
}

/// Returns `true` if `name` matches the GraphQL `Name` production
/// (`/[_A-Za-z][_0-9A-Za-z]*/`).
pub(crate) fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

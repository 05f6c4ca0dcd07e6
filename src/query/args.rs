//! Named GraphQL arguments.

use crate::query::errors::QueryError;
use crate::query::value::{write_pairs, ArgValue};

/// An insertion-ordered mapping of argument name to [`ArgValue`].
///
/// Keys are kept in the order they were added, and duplicates are kept
/// as-is; the remote schema decides what a repeated name means.
///
/// # Example
///
/// ```rust
/// use monday_api::query::{ArgMap, ArgValue};
///
/// let args = ArgMap::new()
///     .arg("board_id", 1234)
///     .arg("item_name", "New task")
///     .arg("position_relative_method", ArgValue::raw("before_at"));
///
/// assert_eq!(args.len(), 3);
/// assert_eq!(args.get("board_id"), Some(&ArgValue::Int(1234)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArgMap {
    entries: Vec<(String, ArgValue)>,
}

impl ArgMap {
    /// Creates an empty argument map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty argument map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends an argument, returning the map for chaining.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Appends an argument in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> &mut Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Returns the value of the first argument called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, ArgValue)> {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<ArgValue>> FromIterator<(K, V)> for ArgMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<ArgValue>> Extend<(K, V)> for ArgMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for ArgMap {
    type Item = (String, ArgValue);
    type IntoIter = std::vec::IntoIter<(String, ArgValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArgMap {
    type Item = &'a (String, ArgValue);
    type IntoIter = std::slice::Iter<'a, (String, ArgValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Formats an argument map as a parenthesized GraphQL argument list.
///
/// Returns an empty string for an empty map, so the result can be spliced
/// directly after a field name.
///
/// # Errors
///
/// Returns [`QueryError::ArgumentSerialization`] if an argument name is not
/// a GraphQL name or a value cannot be serialized.
///
/// # Example
///
/// ```rust
/// use monday_api::query::{format_args, ArgMap, ArgValue};
///
/// let args = ArgMap::new()
///     .arg("ids", vec![1, 2, 3])
///     .arg("filter", ArgMap::new().arg("state", ArgValue::raw("active")));
///
/// assert_eq!(format_args(&args).unwrap(), "(ids: [1,2,3], filter: {state: active})");
/// assert_eq!(format_args(&ArgMap::new()).unwrap(), "");
/// ```
pub fn format_args(args: &ArgMap) -> Result<String, QueryError> {
    let mut out = String::new();
    write_args(args, &mut out)?;
    Ok(out)
}

pub(crate) fn write_args(args: &ArgMap, out: &mut String) -> Result<(), QueryError> {
    if args.is_empty() {
        return Ok(());
    }
    out.push('(');
    write_pairs(args, out)?;
    out.push(')');
    Ok(())
}

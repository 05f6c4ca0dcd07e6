//! GraphQL selection sets.

use crate::query::args::{write_args, ArgMap};
use crate::query::errors::{is_graphql_name, QueryError};

/// One entry of a selection set.
///
/// A `Leaf` is a plain field name. A `Composite` is a field with its own
/// non-empty sub-selection and optional arguments, which is also how one
/// operation is embedded inside another (for example `items` under
/// `boards`).
///
/// # Example
///
/// ```rust
/// use monday_api::query::{format_select, ArgMap, FieldSpec};
///
/// let fields = vec![
///     FieldSpec::from("id"),
///     FieldSpec::from("name"),
///     FieldSpec::nested("column_values", ["id", "text"]),
/// ];
/// assert_eq!(format_select(&fields).unwrap(), "id name column_values { id text }");
///
/// let board = FieldSpec::nested("items_page", ["cursor"])
///     .with_args(ArgMap::new().arg("limit", 5));
/// assert_eq!(format_select(&[board]).unwrap(), "items_page(limit: 5) { cursor }");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum FieldSpec {
    /// A field without a sub-selection.
    Leaf(String),
    /// A field with arguments and a sub-selection.
    Composite {
        /// The field name.
        name: String,
        /// Arguments attached to the field; may be empty.
        arguments: ArgMap,
        /// The nested selection; must not be empty.
        selection: Vec<FieldSpec>,
    },
}

impl FieldSpec {
    /// Creates a leaf field.
    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::Leaf(name.into())
    }

    /// Creates a composite field selecting `fields`.
    #[must_use]
    pub fn nested<I, F>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Self>,
    {
        Self::Composite {
            name: name.into(),
            arguments: ArgMap::new(),
            selection: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Attaches arguments to a field.
    ///
    /// A leaf becomes a composite with an empty selection, which fails to
    /// format until fields are selected under it.
    #[must_use]
    pub fn with_args(self, args: ArgMap) -> Self {
        match self {
            Self::Leaf(name) => Self::Composite {
                name,
                arguments: args,
                selection: Vec::new(),
            },
            Self::Composite {
                name, selection, ..
            } => Self::Composite {
                name,
                arguments: args,
                selection,
            },
        }
    }

    /// Converts a list of names into leaf fields.
    ///
    /// ```rust
    /// use monday_api::query::FieldSpec;
    ///
    /// let fields = FieldSpec::list(&["id", "name"]);
    /// assert_eq!(fields, vec![FieldSpec::leaf("id"), FieldSpec::leaf("name")]);
    /// ```
    #[must_use]
    pub fn list(names: &[&str]) -> Vec<Self> {
        names.iter().copied().map(Self::leaf).collect()
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(name) | Self::Composite { name, .. } => name,
        }
    }

    fn write_to(&self, out: &mut String) -> Result<(), QueryError> {
        let name = self.name();
        if name.is_empty() {
            return Err(QueryError::invalid_selection("field name is empty"));
        }
        if !is_graphql_name(name) {
            return Err(QueryError::invalid_selection(format!(
                "`{name}` is not a valid GraphQL field name"
            )));
        }
        out.push_str(name);

        if let Self::Composite {
            arguments,
            selection,
            ..
        } = self
        {
            if selection.is_empty() {
                return Err(QueryError::invalid_selection(format!(
                    "`{name}` has an empty sub-selection"
                )));
            }
            write_args(arguments, out)?;
            out.push_str(" { ");
            write_selection(selection, out)?;
            out.push_str(" }");
        }
        Ok(())
    }
}

impl From<&str> for FieldSpec {
    fn from(name: &str) -> Self {
        Self::Leaf(name.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(name: String) -> Self {
        Self::Leaf(name)
    }
}

/// Formats a field list as the inside of a GraphQL selection set.
///
/// The top level is not wrapped in braces; the owning operation supplies
/// them. Nested composites wrap their own sub-selection.
///
/// # Errors
///
/// Returns [`QueryError::InvalidSelection`] if `fields` is empty, a field
/// name is empty or malformed, or a composite has no sub-fields. Argument
/// errors on composites surface as [`QueryError::ArgumentSerialization`].
pub fn format_select(fields: &[FieldSpec]) -> Result<String, QueryError> {
    let mut out = String::new();
    write_selection(fields, &mut out)?;
    Ok(out)
}

pub(crate) fn write_selection(fields: &[FieldSpec], out: &mut String) -> Result<(), QueryError> {
    if fields.is_empty() {
        return Err(QueryError::invalid_selection("selection set is empty"));
    }
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        field.write_to(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaves_are_space_joined() {
        let fields = FieldSpec::list(&["id", "title", "description"]);
        assert_eq!(format_select(&fields).unwrap(), "id title description");
    }

    #[test]
    fn test_composite_nesting() {
        let fields = vec![
            FieldSpec::from("id"),
            FieldSpec::from("name"),
            FieldSpec::nested("column_values", ["id", "text"]),
        ];
        assert_eq!(
            format_select(&fields).unwrap(),
            "id name column_values { id text }"
        );
    }

    #[test]
    fn test_deep_nesting_with_arguments() {
        let fields = vec![FieldSpec::nested(
            "boards",
            [FieldSpec::nested(
                "items_page",
                [FieldSpec::nested("items", ["id"])],
            )
            .with_args(ArgMap::new().arg("limit", 2))],
        )
        .with_args(ArgMap::new().arg("ids", [7]))];

        assert_eq!(
            format_select(&fields).unwrap(),
            "boards(ids: [7]) { items_page(limit: 2) { items { id } } }"
        );
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        assert!(matches!(
            format_select(&[]),
            Err(QueryError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_empty_leaf_name_is_rejected() {
        let fields = vec![FieldSpec::leaf("id"), FieldSpec::leaf("")];
        assert!(matches!(
            format_select(&fields),
            Err(QueryError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_malformed_leaf_name_is_rejected() {
        let fields = vec![FieldSpec::leaf("id name")];
        assert!(matches!(
            format_select(&fields),
            Err(QueryError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_composite_with_empty_nested_list_is_rejected() {
        let fields = vec![FieldSpec::nested("column_values", Vec::<FieldSpec>::new())];
        let err = format_select(&fields).unwrap_err();
        assert!(err.to_string().contains("column_values"));

        let with_args_only =
            vec![FieldSpec::leaf("items").with_args(ArgMap::new().arg("limit", 1))];
        assert!(format_select(&with_args_only).is_err());
    }

    #[test]
    fn test_argument_errors_propagate() {
        let fields = vec![
            FieldSpec::nested("items", ["id"]).with_args(ArgMap::new().arg("score", f64::NAN))
        ];
        assert!(matches!(
            format_select(&fields),
            Err(QueryError::ArgumentSerialization { .. })
        ));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let fields = vec![FieldSpec::nested("group", ["id", "title"]), "id".into()];
        assert_eq!(
            format_select(&fields).unwrap(),
            format_select(&fields).unwrap()
        );
    }
}

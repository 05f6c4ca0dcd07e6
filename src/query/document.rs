//! Whole GraphQL documents.

use std::fmt;

use crate::query::args::ArgMap;
use crate::query::errors::QueryError;
use crate::query::selection::{write_selection, FieldSpec};

/// The kind of a GraphQL operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// A read operation.
    Query,
    /// A write operation.
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Mutation => f.write_str("mutation"),
        }
    }
}

/// An anonymous GraphQL operation: a kind plus its root selection.
///
/// Most documents hold a single root operation built with
/// [`QueryDocument::operation`]. Composed documents push
/// [`FieldSpec::Composite`] roots directly, which lets one resource embed
/// another's selection (items under boards) without re-deriving any
/// formatting.
///
/// # Example
///
/// ```rust
/// use monday_api::query::{ArgMap, FieldSpec, QueryDocument};
///
/// let document = QueryDocument::query().field(
///     FieldSpec::nested("boards", [FieldSpec::nested("columns", ["id", "title"])])
///         .with_args(ArgMap::new().arg("ids", [123])),
/// );
///
/// assert_eq!(
///     document.render().unwrap(),
///     "query { boards(ids: [123]) { columns { id title } } }"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QueryDocument {
    kind: OperationKind,
    selection: Vec<FieldSpec>,
}

impl QueryDocument {
    /// Creates an empty document of the given kind.
    #[must_use]
    pub const fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            selection: Vec::new(),
        }
    }

    /// Creates an empty `query` document.
    #[must_use]
    pub const fn query() -> Self {
        Self::new(OperationKind::Query)
    }

    /// Creates an empty `mutation` document.
    #[must_use]
    pub const fn mutation() -> Self {
        Self::new(OperationKind::Mutation)
    }

    /// Creates a document with one root operation.
    #[must_use]
    pub fn operation(
        kind: OperationKind,
        name: impl Into<String>,
        args: ArgMap,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self::new(kind).field(FieldSpec::Composite {
            name: name.into(),
            arguments: args,
            selection: fields,
        })
    }

    /// Adds a root field.
    #[must_use]
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.selection.push(field);
        self
    }

    /// Returns the operation kind.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Returns the root selection.
    #[must_use]
    pub fn selection(&self) -> &[FieldSpec] {
        &self.selection
    }

    /// Renders the document text.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if the root selection is empty or any
    /// nested selection or argument is invalid.
    pub fn render(&self) -> Result<String, QueryError> {
        let mut out = self.kind.to_string();
        out.push_str(" { ");
        write_selection(&self.selection, &mut out)?;
        out.push_str(" }");
        Ok(out)
    }
}

/// Assembles a single-operation document.
///
/// # Errors
///
/// Returns a [`QueryError`] if `fields` is empty or any argument or
/// field cannot be formatted.
///
/// # Example
///
/// ```rust
/// use monday_api::query::{assemble, ArgMap, FieldSpec, OperationKind};
///
/// let text = assemble(
///     OperationKind::Mutation,
///     "archive_item",
///     &ArgMap::new().arg("item_id", 42),
///     &FieldSpec::list(&["id"]),
/// )
/// .unwrap();
///
/// assert_eq!(text, "mutation { archive_item(item_id: 42) { id } }");
/// ```
pub fn assemble(
    kind: OperationKind,
    operation_name: &str,
    args: &ArgMap,
    fields: &[FieldSpec],
) -> Result<String, QueryError> {
    QueryDocument::operation(kind, operation_name, args.clone(), fields.to_vec()).render()
}

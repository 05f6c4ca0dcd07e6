//! Column operations.

use crate::clients::{ApiResult, GraphqlClient};
use crate::query::{ArgMap, ArgValue, FieldSpec, OperationKind, QueryDocument};

use super::selection_or;

/// Column queries and mutations, obtained from [`GraphqlClient::columns`].
#[derive(Clone, Copy, Debug)]
pub struct Columns<'a> {
    client: &'a GraphqlClient,
}

impl<'a> Columns<'a> {
    /// Fields selected on a column when no selection is given.
    pub const DEFAULT_SELECT: &'static [&'static str] = &["id", "title", "description"];

    /// Fields selected on the updated item by the value mutations.
    pub const DEFAULT_VALUE_SELECT: &'static [&'static str] = &["id", "name"];

    pub(crate) const fn new(client: &'a GraphqlClient) -> Self {
        Self { client }
    }

    /// Lists the columns of the boards matched by `args`.
    ///
    /// Sends `query { boards(args) { columns { select } } }`.
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn list(&self, args: ArgMap, select: Option<Vec<FieldSpec>>) -> ApiResult {
        let columns = FieldSpec::nested("columns", selection_or(select, Self::DEFAULT_SELECT));
        let boards = FieldSpec::nested("boards", [columns]).with_args(args);
        let document = QueryDocument::query().field(boards);
        self.client.execute(&document).await
    }

    /// Reads column values, optionally narrowed to boards and items.
    ///
    /// An empty id slice leaves that level unfiltered.
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // query { boards(ids: [1]) { items(ids: [2, 3]) { column_values { id text } } } }
    /// let data = client
    ///     .columns()
    ///     .column_values(&[1], &[2, 3], Some(FieldSpec::list(&["id", "text"])))
    ///     .await?;
    /// ```
    pub async fn column_values(
        &self,
        board_ids: &[u64],
        item_ids: &[u64],
        select: Option<Vec<FieldSpec>>,
    ) -> ApiResult {
        let values = FieldSpec::nested("column_values", selection_or(select, Self::DEFAULT_SELECT));
        let items = FieldSpec::nested("items", [values]).with_args(ids_filter(item_ids));
        let boards = FieldSpec::nested("boards", [items]).with_args(ids_filter(board_ids));
        self.client.execute(&QueryDocument::query().field(boards)).await
    }

    /// Creates a column (`create_column`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn create(&self, args: ArgMap, select: Option<Vec<FieldSpec>>) -> ApiResult {
        self.mutate("create_column", args, select, Self::DEFAULT_SELECT).await
    }

    /// Renames a column (`change_column_title`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn change_title(&self, args: ArgMap, select: Option<Vec<FieldSpec>>) -> ApiResult {
        self.mutate("change_column_title", args, select, Self::DEFAULT_SELECT).await
    }

    /// Updates a column's metadata (`change_column_metadata`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn change_metadata(&self, args: ArgMap, select: Option<Vec<FieldSpec>>) -> ApiResult {
        self.mutate("change_column_metadata", args, select, Self::DEFAULT_SELECT).await
    }

    /// Sets one column value of an item from a JSON value (`change_column_value`).
    ///
    /// The `value` argument must be a JSON string; build it with
    /// [`ArgValue::json`].
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn change_value(&self, args: ArgMap, select: Option<Vec<FieldSpec>>) -> ApiResult {
        self.mutate("change_column_value", args, select, Self::DEFAULT_VALUE_SELECT).await
    }

    /// Sets one column value of an item from a plain string
    /// (`change_simple_column_value`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn change_simple_value(
        &self,
        args: ArgMap,
        select: Option<Vec<FieldSpec>>,
    ) -> ApiResult {
        self.mutate("change_simple_column_value", args, select, Self::DEFAULT_VALUE_SELECT).await
    }

    /// Sets several column values of an item at once
    /// (`change_multiple_column_values`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn change_multiple_values(
        &self,
        args: ArgMap,
        select: Option<Vec<FieldSpec>>,
    ) -> ApiResult {
        self.mutate("change_multiple_column_values", args, select, Self::DEFAULT_VALUE_SELECT)
            .await
    }

    /// Deletes a column from a board (`delete_column`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn delete(
        &self,
        board_id: impl Into<ArgValue>,
        column_id: impl Into<ArgValue>,
        select: Option<Vec<FieldSpec>>,
    ) -> ApiResult {
        let args = ArgMap::new()
            .arg("board_id", board_id)
            .arg("column_id", column_id);
        self.mutate("delete_column", args, select, Self::DEFAULT_SELECT).await
    }

    async fn mutate(
        &self,
        operation: &str,
        args: ArgMap,
        select: Option<Vec<FieldSpec>>,
        default: &[&str],
    ) -> ApiResult {
        let document = QueryDocument::operation(
            OperationKind::Mutation,
            operation,
            args,
            selection_or(select, default),
        );
        self.client.execute(&document).await
    }
}

fn ids_filter(ids: &[u64]) -> ArgMap {
    if ids.is_empty() {
        ArgMap::new()
    } else {
        ArgMap::new().arg("ids", ids.to_vec())
    }
}

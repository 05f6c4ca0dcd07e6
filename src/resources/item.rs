//! Item operations.

use crate::clients::{ApiResult, GraphqlClient};
use crate::query::{ArgMap, ArgValue, FieldSpec, OperationKind, QueryDocument};

use super::selection_or;

/// Item queries and mutations, obtained from [`GraphqlClient::items`].
///
/// # Example
///
/// ```rust,ignore
/// use monday_api::query::{ArgMap, ArgValue};
///
/// let columns = serde_json::json!({"status": {"label": "Done"}});
/// let data = client
///     .items()
///     .create(
///         ArgMap::new()
///             .arg("board_id", 1234)
///             .arg("item_name", "New task")
///             .arg("column_values", ArgValue::json(&columns)),
///         None,
///     )
///     .await?;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Items<'a> {
    client: &'a GraphqlClient,
}

impl<'a> Items<'a> {
    /// Fields selected on an item when no selection is given.
    pub const DEFAULT_SELECT: &'static [&'static str] = &["id", "name", "created_at"];

    /// Fields selected by `archive` and `delete` when no selection is given.
    pub const DEFAULT_ID_SELECT: &'static [&'static str] = &["id"];

    pub(crate) const fn new(client: &'a GraphqlClient) -> Self {
        Self { client }
    }

    /// Queries items (`items(args)`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn query(&self, args: ArgMap, select: Option<Vec<FieldSpec>>) -> ApiResult {
        self.send(OperationKind::Query, "items", args, select, Self::DEFAULT_SELECT)
            .await
    }

    /// Finds items on a board by column values.
    ///
    /// Sends `query { items_page_by_column_values(args) { items { select } } }`.
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn page_by_column_values(
        &self,
        args: ArgMap,
        select: Option<Vec<FieldSpec>>,
    ) -> ApiResult {
        let items = FieldSpec::nested("items", selection_or(select, Self::DEFAULT_SELECT));
        let document = QueryDocument::operation(
            OperationKind::Query,
            "items_page_by_column_values",
            args,
            vec![items],
        );
        self.client.execute(&document).await
    }

    /// Creates an item (`create_item`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn create(&self, args: ArgMap, select: Option<Vec<FieldSpec>>) -> ApiResult {
        self.send(OperationKind::Mutation, "create_item", args, select, Self::DEFAULT_SELECT)
            .await
    }

    /// Duplicates an item (`duplicate_item`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn duplicate(
        &self,
        board_id: impl Into<ArgValue>,
        item_id: impl Into<ArgValue>,
        with_updates: bool,
        select: Option<Vec<FieldSpec>>,
    ) -> ApiResult {
        let args = ArgMap::new()
            .arg("board_id", board_id)
            .arg("item_id", item_id)
            .arg("with_updates", with_updates);
        self.send(OperationKind::Mutation, "duplicate_item", args, select, Self::DEFAULT_SELECT)
            .await
    }

    /// Archives an item (`archive_item`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn archive(
        &self,
        item_id: impl Into<ArgValue>,
        select: Option<Vec<FieldSpec>>,
    ) -> ApiResult {
        let args = ArgMap::new().arg("item_id", item_id);
        self.send(OperationKind::Mutation, "archive_item", args, select, Self::DEFAULT_ID_SELECT)
            .await
    }

    /// Deletes an item (`delete_item`).
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn delete(
        &self,
        item_id: impl Into<ArgValue>,
        select: Option<Vec<FieldSpec>>,
    ) -> ApiResult {
        let args = ArgMap::new().arg("item_id", item_id);
        self.send(OperationKind::Mutation, "delete_item", args, select, Self::DEFAULT_ID_SELECT)
            .await
    }

    async fn send(
        &self,
        kind: OperationKind,
        operation: &str,
        args: ArgMap,
        select: Option<Vec<FieldSpec>>,
        default: &[&str],
    ) -> ApiResult {
        let document =
            QueryDocument::operation(kind, operation, args, selection_or(select, default));
        self.client.execute(&document).await
    }
}

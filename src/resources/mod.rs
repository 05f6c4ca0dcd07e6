//! Typed entry points for common monday.com operations.
//!
//! Each resource is a borrowed view over a [`GraphqlClient`] that builds
//! the operation's document from caller arguments and dispatches it.
//! Arguments are passed through unchecked; the selection defaults to the
//! resource's documented field list when `None` is given.
//!
//! # Available Resources
//!
//! - [`Columns`]: board columns and item column values
//! - [`Items`]: board items
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_api::query::{ArgMap, ArgValue};
//!
//! let data = client
//!     .columns()
//!     .create(
//!         ArgMap::new()
//!             .arg("board_id", 1234)
//!             .arg("title", "Status")
//!             .arg("column_type", ArgValue::raw("status")),
//!         None,
//!     )
//!     .await?;
//! println!("Created column {}", data["create_column"]["id"]);
//! ```

mod column;
mod item;

pub use column::Columns;
pub use item::Items;

use crate::clients::GraphqlClient;
use crate::query::FieldSpec;

impl GraphqlClient {
    /// Returns the column operations for this client.
    #[must_use]
    pub const fn columns(&self) -> Columns<'_> {
        Columns::new(self)
    }

    /// Returns the item operations for this client.
    #[must_use]
    pub const fn items(&self) -> Items<'_> {
        Items::new(self)
    }
}

/// Resolves an optional caller selection against a default field list.
fn selection_or(select: Option<Vec<FieldSpec>>, default: &[&str]) -> Vec<FieldSpec> {
    select.unwrap_or_else(|| FieldSpec::list(default))
}

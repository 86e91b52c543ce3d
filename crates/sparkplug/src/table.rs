//! Per-table handle for direct operations and builder construction.

use std::fmt;
use std::sync::Arc;

use sparkplug_model::Operation;
use sparkplug_model::input::{DeleteItemInput, GetItemInput, PutItemInput};
use sparkplug_model::types::{Item, Key};

use crate::builder::{Query, Scan};
use crate::error::Result;
use crate::expression::{Expression, ExpressionSlot, Fragment};
use crate::response::Outcome;
use crate::transport::{Transport, dispatch};

/// A handle to one named table.
///
/// Handles are cheap to clone and immutable: [`Table::condition`] returns a
/// new handle carrying the condition fragment rather than mutating the
/// receiver, so a shared handle can never change underneath another owner.
#[derive(Clone)]
pub struct Table {
    name: String,
    transport: Arc<dyn Transport>,
    condition: Option<Fragment>,
}

impl Table {
    pub(crate) fn new(name: String, transport: Arc<dyn Transport>) -> Self {
        Self {
            name,
            transport,
            condition: None,
        }
    }

    /// The table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Returns a new handle whose subsequent [`put`](Self::put) calls carry
    /// the given condition expression.
    #[must_use]
    pub fn condition(&self, expr: impl Into<Expression>) -> Self {
        Self {
            name: self.name.clone(),
            transport: Arc::clone(&self.transport),
            condition: Some(expr.into().into_fragment(ExpressionSlot::Condition)),
        }
    }

    /// Get a single item by primary key.
    pub async fn get(&self, key: Key) -> Result<Outcome> {
        self.get_with(key, None).await
    }

    /// Get a single item by primary key with a strongly consistent read.
    pub async fn strong_get(&self, key: Key) -> Result<Outcome> {
        self.get_with(key, Some(true)).await
    }

    async fn get_with(&self, key: Key, consistent_read: Option<bool>) -> Result<Outcome> {
        let input = GetItemInput {
            table_name: self.name.clone(),
            key,
            consistent_read,
        };
        dispatch(self.transport.as_ref(), Operation::GetItem, &input).await
    }

    /// Put (insert or replace) an item.
    ///
    /// When this handle carries a condition fragment, the condition
    /// expression and both placeholder maps are merged into the request.
    pub async fn put(&self, item: Item) -> Result<Outcome> {
        let mut input = PutItemInput {
            table_name: self.name.clone(),
            item,
            ..Default::default()
        };
        if let Some(frag) = &self.condition {
            input.condition_expression = Some(frag.expression.clone());
            input.expression_attribute_values = frag.values.clone();
            input.expression_attribute_names = frag.names.clone();
        }
        dispatch(self.transport.as_ref(), Operation::PutItem, &input).await
    }

    /// Delete an item by primary key.
    pub async fn delete(&self, key: Key) -> Result<Outcome> {
        let input = DeleteItemInput {
            table_name: self.name.clone(),
            key,
        };
        dispatch(self.transport.as_ref(), Operation::DeleteItem, &input).await
    }

    /// Start a query against this table.
    ///
    /// A filter object is deconstructed into a key-condition expression; a
    /// raw [`Expression`] is used verbatim.
    #[must_use]
    pub fn query(&self, expr: impl Into<Expression>) -> Query {
        Query::new(
            Arc::clone(&self.transport),
            self.name.clone(),
            expr.into(),
        )
    }

    /// Start a scan of this table.
    ///
    /// A filter object is deconstructed into a filter expression; a raw
    /// [`Expression`] is used verbatim.
    #[must_use]
    pub fn scan(&self, expr: impl Into<Expression>) -> Scan {
        Scan::new(
            Arc::clone(&self.transport),
            self.name.clone(),
            expr.into(),
        )
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

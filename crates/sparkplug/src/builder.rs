//! Chainable builders for `Query` and `Scan`.
//!
//! A builder starts from a table handle with its expression already resolved,
//! accumulates modifiers by value, and is consumed by `exec`. Consuming the
//! builder makes accidental double execution a compile error.

use std::fmt;
use std::sync::Arc;

use sparkplug_model::Operation;
use sparkplug_model::input::{QueryInput, ScanInput};
use sparkplug_model::types::Key;

use crate::error::Result;
use crate::expression::{Expression, ExpressionSlot};
use crate::response::Outcome;
use crate::transport::{Transport, dispatch};

/// A pending `Query`, created by [`Table::query`](crate::table::Table::query).
pub struct Query {
    transport: Arc<dyn Transport>,
    input: QueryInput,
}

impl Query {
    pub(crate) fn new(transport: Arc<dyn Transport>, table_name: String, expr: Expression) -> Self {
        let frag = expr.into_fragment(ExpressionSlot::KeyCondition);
        let input = QueryInput {
            table_name,
            key_condition_expression: Some(frag.expression),
            expression_attribute_values: frag.values,
            expression_attribute_names: frag.names,
            ..Default::default()
        };
        Self { transport, input }
    }

    /// Run the query against a secondary index instead of the primary key.
    #[must_use]
    pub fn on(mut self, index: impl Into<String>) -> Self {
        self.input.index_name = Some(index.into());
        self
    }

    /// Traverse in descending key order.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.input.scan_index_forward = Some(false);
        self
    }

    /// Cap the number of items evaluated for this page.
    #[must_use]
    pub fn limit(mut self, n: i32) -> Self {
        self.input.limit = Some(n);
        self
    }

    /// Use a strongly consistent read.
    #[must_use]
    pub fn strong_read(mut self) -> Self {
        self.input.consistent_read = Some(true);
        self
    }

    /// Resume from a pagination cursor returned as `last_key` by a previous
    /// page.
    #[must_use]
    pub fn start(mut self, cursor: Key) -> Self {
        self.input.exclusive_start_key = Some(cursor);
        self
    }

    /// Execute the query, consuming the builder.
    pub async fn exec(self) -> Result<Outcome> {
        dispatch(self.transport.as_ref(), Operation::Query, &self.input).await
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

/// A pending `Scan`, created by [`Table::scan`](crate::table::Table::scan).
///
/// Offers the same modifiers as [`Query`] except `on`: scans always walk the
/// base table.
pub struct Scan {
    transport: Arc<dyn Transport>,
    input: ScanInput,
}

impl Scan {
    pub(crate) fn new(transport: Arc<dyn Transport>, table_name: String, expr: Expression) -> Self {
        let frag = expr.into_fragment(ExpressionSlot::Filter);
        let input = ScanInput {
            table_name,
            filter_expression: Some(frag.expression),
            expression_attribute_values: frag.values,
            expression_attribute_names: frag.names,
            ..Default::default()
        };
        Self { transport, input }
    }

    /// Carried on the wire for parity with [`Query::reverse`]; the store
    /// ignores direction for scans.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.input.scan_index_forward = Some(false);
        self
    }

    /// Cap the number of items evaluated for this page.
    #[must_use]
    pub fn limit(mut self, n: i32) -> Self {
        self.input.limit = Some(n);
        self
    }

    /// Use a strongly consistent read.
    #[must_use]
    pub fn strong_read(mut self) -> Self {
        self.input.consistent_read = Some(true);
        self
    }

    /// Resume from a pagination cursor returned as `last_key` by a previous
    /// page.
    #[must_use]
    pub fn start(mut self, cursor: Key) -> Self {
        self.input.exclusive_start_key = Some(cursor);
        self
    }

    /// Execute the scan, consuming the builder.
    pub async fn exec(self) -> Result<Outcome> {
        dispatch(self.transport.as_ref(), Operation::Scan, &self.input).await
    }
}

impl fmt::Debug for Scan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scan")
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

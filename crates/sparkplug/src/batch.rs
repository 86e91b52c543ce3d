//! Batch accumulator for multi-table reads and writes.
//!
//! A [`Batch`] collects get, put, and delete requests keyed by table name,
//! then issues at most two wire calls on `exec`: one `BatchGetItem` for all
//! accumulated reads and one `BatchWriteItem` for all accumulated writes.
//! When both are present they run concurrently.
//!
//! Reads and writes answer with structurally different response shapes, so
//! the result is a tagged [`BatchOutcome`] rather than a merged outcome:
//! callers discriminate explicitly instead of guessing which shape they got.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use futures::future;

use sparkplug_model::Operation;
use sparkplug_model::input::{BatchGetItemInput, BatchWriteItemInput};
use sparkplug_model::types::{Item, Key, KeysAndAttributes, WriteRequest};

use crate::error::Result;
use crate::response::Outcome;
use crate::table::Table;
use crate::transport::{Transport, dispatch};

/// One value or a list of values, accepted interchangeably by the batch
/// accumulators.
#[derive(Debug, Clone)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// A list of values, appended in order.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

/// The result of [`Batch::exec`].
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// The batch held only reads or only writes, so one call was made.
    Single(Outcome),
    /// The batch held both, so two concurrent calls were made.
    Paired {
        /// The normalized `BatchGetItem` response.
        read: Outcome,
        /// The normalized `BatchWriteItem` response.
        write: Outcome,
    },
}

impl BatchOutcome {
    /// The outcome of a single-call batch, if that is what this is.
    #[must_use]
    pub fn single(&self) -> Option<&Outcome> {
        match self {
            Self::Single(outcome) => Some(outcome),
            Self::Paired { .. } => None,
        }
    }

    /// The read and write outcomes of a paired batch, if that is what this is.
    #[must_use]
    pub fn paired(&self) -> Option<(&Outcome, &Outcome)> {
        match self {
            Self::Single(_) => None,
            Self::Paired { read, write } => Some((read, write)),
        }
    }
}

/// An accumulator of per-table batch requests.
///
/// Created by [`Client::batch`](crate::client::Client::batch). Accumulation
/// never touches the network; only [`exec`](Self::exec) does.
pub struct Batch {
    transport: Arc<dyn Transport>,
    gets: HashMap<String, Vec<Key>>,
    writes: HashMap<String, Vec<WriteRequest>>,
}

impl Batch {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            gets: HashMap::new(),
            writes: HashMap::new(),
        }
    }

    /// Append one or more keys to retrieve from the given table.
    #[must_use]
    pub fn get(mut self, table: &Table, keys: impl Into<OneOrMany<Key>>) -> Self {
        self.gets
            .entry(table.name().to_owned())
            .or_default()
            .extend(keys.into().into_vec());
        self
    }

    /// Append one or more items to put into the given table.
    #[must_use]
    pub fn put(mut self, table: &Table, items: impl Into<OneOrMany<Item>>) -> Self {
        let writes = self.writes.entry(table.name().to_owned()).or_default();
        writes.extend(items.into().into_vec().into_iter().map(WriteRequest::put));
        self
    }

    /// Append one or more keys to delete from the given table.
    #[must_use]
    pub fn delete(mut self, table: &Table, keys: impl Into<OneOrMany<Key>>) -> Self {
        let writes = self.writes.entry(table.name().to_owned()).or_default();
        writes.extend(keys.into().into_vec().into_iter().map(WriteRequest::delete));
        self
    }

    /// Issue the accumulated requests.
    ///
    /// Reads and writes go out as separate calls; with both present the two
    /// run concurrently and both are driven to completion. If both fail, the
    /// read error is reported. An empty batch makes no call at all and
    /// resolves to an empty single outcome.
    pub async fn exec(self) -> Result<BatchOutcome> {
        let Self {
            transport,
            gets,
            writes,
        } = self;

        let read = (!gets.is_empty()).then(|| BatchGetItemInput {
            request_items: gets
                .into_iter()
                .map(|(table, keys)| {
                    (
                        table,
                        KeysAndAttributes {
                            keys,
                            consistent_read: None,
                        },
                    )
                })
                .collect(),
        });
        let write = (!writes.is_empty()).then(|| BatchWriteItemInput {
            request_items: writes,
        });

        match (read, write) {
            (None, None) => Ok(BatchOutcome::Single(Outcome::default())),
            (Some(input), None) => {
                let outcome =
                    dispatch(transport.as_ref(), Operation::BatchGetItem, &input).await?;
                Ok(BatchOutcome::Single(outcome))
            }
            (None, Some(input)) => {
                let outcome =
                    dispatch(transport.as_ref(), Operation::BatchWriteItem, &input).await?;
                Ok(BatchOutcome::Single(outcome))
            }
            (Some(read_input), Some(write_input)) => {
                let (read, write) = future::join(
                    dispatch(transport.as_ref(), Operation::BatchGetItem, &read_input),
                    dispatch(transport.as_ref(), Operation::BatchWriteItem, &write_input),
                )
                .await;
                Ok(BatchOutcome::Paired {
                    read: read?,
                    write: write?,
                })
            }
        }
    }
}

impl fmt::Debug for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Batch")
            .field("gets", &self.gets)
            .field("writes", &self.writes)
            .finish_non_exhaustive()
    }
}

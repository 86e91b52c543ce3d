//! Response normalization.
//!
//! The store's raw responses populate different fields per operation. The
//! normalizer reshapes them into a single [`Outcome`] with a `data` payload
//! chosen by priority (single item, then item list, then per-table mapping)
//! and the paging counters copied over. Structurally absent fields stay
//! absent: an empty item list or a zero count is preserved, only missing
//! fields are dropped.

use std::collections::HashMap;

use serde::Serialize;

use sparkplug_model::output::RawResponse;
use sparkplug_model::types::{Item, Key, WriteRequest};

/// The payload of a normalized result.
///
/// Exactly one shape is populated by the store for any given call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Data {
    /// A single item (`GetItem`).
    Item(Item),
    /// A list of items (`Query` / `Scan`).
    Items(Vec<Item>),
    /// Items keyed by table name (`BatchGetItem`). The keying is preserved
    /// unchanged from the wire.
    Collections(HashMap<String, Vec<Item>>),
}

/// A normalized store response.
///
/// Serializes to `{data, count, scannedCount, lastKey, unprocessedItems}`
/// with absent fields omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// The response payload, if the call produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,

    /// The number of items in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// The number of items evaluated before filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanned_count: Option<i64>,

    /// The pagination cursor to resume from, fed back via `start`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_key: Option<Key>,

    /// Writes the store reported as unprocessed, when any. Resubmission is
    /// the caller's decision; this layer never retries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_items: Option<HashMap<String, Vec<WriteRequest>>>,
}

impl Outcome {
    /// The single item, if `data` holds one.
    #[must_use]
    pub fn item(&self) -> Option<&Item> {
        match &self.data {
            Some(Data::Item(item)) => Some(item),
            _ => None,
        }
    }

    /// The item list, if `data` holds one.
    #[must_use]
    pub fn items(&self) -> Option<&[Item]> {
        match &self.data {
            Some(Data::Items(items)) => Some(items),
            _ => None,
        }
    }

    /// The per-table mapping, if `data` holds one.
    #[must_use]
    pub fn collections(&self) -> Option<&HashMap<String, Vec<Item>>> {
        match &self.data {
            Some(Data::Collections(map)) => Some(map),
            _ => None,
        }
    }

    /// The items retrieved for one table of a batch read.
    #[must_use]
    pub fn collection(&self, table: &str) -> Option<&[Item]> {
        self.collections()
            .and_then(|map| map.get(table))
            .map(Vec::as_slice)
    }
}

/// Normalize a raw store response.
///
/// Pure, synchronous, and total: every raw response maps to an outcome.
#[must_use]
pub fn normalize(raw: RawResponse) -> Outcome {
    let data = if let Some(item) = raw.item {
        Some(Data::Item(item))
    } else if let Some(items) = raw.items {
        Some(Data::Items(items))
    } else {
        raw.responses.map(Data::Collections)
    };

    // An empty unprocessed map carries no signal; only surface real leftovers.
    let unprocessed_items = raw.unprocessed_items.filter(|m| !m.is_empty());

    Outcome {
        data,
        count: raw.count,
        scanned_count: raw.scanned_count,
        last_key: raw.last_evaluated_key,
        unprocessed_items,
    }
}

//! The response shape the client consumes.
//!
//! The store populates a different subset of these fields for each operation,
//! so one struct covers all seven. Every field is optional: "structurally
//! absent" must stay distinguishable from "present but empty or zero", which
//! the response normalizer in the client crate relies on.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Item, Key, KeysAndAttributes, WriteRequest};

/// A raw response body from the remote store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawResponse {
    /// The single item returned by `GetItem`. Absent when no item matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,

    /// The items returned by `Query` or `Scan`. May be present and empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,

    /// The per-table items returned by `BatchGetItem`. A table with no
    /// matches may be absent from the map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<HashMap<String, Vec<Item>>>,

    /// The number of items in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// The number of items evaluated before filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanned_count: Option<i64>,

    /// The pagination cursor: feed back as `ExclusiveStartKey` to resume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_key: Option<Key>,

    /// Keys a `BatchGetItem` call did not process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_keys: Option<HashMap<String, KeysAndAttributes>>,

    /// Writes a `BatchWriteItem` call did not process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_items: Option<HashMap<String, Vec<WriteRequest>>>,

    /// Attribute values returned by write operations, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Item>,
}

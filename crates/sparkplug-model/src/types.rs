//! Shared wire types used by several operations.
//!
//! Items and keys are plain JSON objects; the store's attribute typing is
//! opaque to this client. `serde_json::Map` keeps iteration deterministic
//! and deduplicates repeated keys with last-write-wins semantics, which is
//! exactly the collision behavior expression building relies on.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An item: a map of attribute name to opaque attribute value.
pub type Item = serde_json::Map<String, Value>;

/// A primary key: a map of key attribute name to value.
pub type Key = serde_json::Map<String, Value>;

/// Expression attribute names mapping (`#name` placeholders to attribute names).
pub type ExpressionAttributeNames = HashMap<String, String>;

/// Expression attribute values mapping (`:value` placeholders to values).
pub type ExpressionAttributeValues = HashMap<String, Value>;

/// The keys to retrieve from one table in a `BatchGetItem` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeysAndAttributes {
    /// The primary keys of the items to retrieve.
    pub keys: Vec<Key>,

    /// Whether to use a strongly consistent read for this table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,
}

/// A single write within a `BatchWriteItem` request.
///
/// Exactly one of `put_request` or `delete_request` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteRequest {
    /// A request to put an item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_request: Option<PutRequest>,

    /// A request to delete an item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_request: Option<DeleteRequest>,
}

impl WriteRequest {
    /// A tagged insert operation.
    #[must_use]
    pub fn put(item: Item) -> Self {
        Self {
            put_request: Some(PutRequest { item }),
            delete_request: None,
        }
    }

    /// A tagged remove operation.
    #[must_use]
    pub fn delete(key: Key) -> Self {
        Self {
            put_request: None,
            delete_request: Some(DeleteRequest { key }),
        }
    }

    /// Returns `true` if this is an insert operation.
    #[must_use]
    pub fn is_put(&self) -> bool {
        self.put_request.is_some()
    }
}

/// A request to put an item within a `BatchWriteItem` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRequest {
    /// The item attributes to put.
    pub item: Item,
}

/// A request to delete an item within a `BatchWriteItem` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRequest {
    /// The primary key of the item to delete.
    pub key: Key,
}

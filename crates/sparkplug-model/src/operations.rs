//! The operations the client issues against the remote store.

use std::fmt;

/// All store operations the client can issue.
///
/// The client only ever constructs requests for these seven operations;
/// table management and other control-plane calls are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Get a single item by primary key.
    GetItem,
    /// Put (insert or replace) a single item.
    PutItem,
    /// Delete a single item by primary key.
    DeleteItem,
    /// Query items by key condition, optionally against a secondary index.
    Query,
    /// Scan a table with an optional filter.
    Scan,
    /// Combined read across multiple tables.
    BatchGetItem,
    /// Combined write (puts and deletes) across multiple tables.
    BatchWriteItem,
}

impl Operation {
    /// Returns the wire-protocol operation name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetItem => "GetItem",
            Self::PutItem => "PutItem",
            Self::DeleteItem => "DeleteItem",
            Self::Query => "Query",
            Self::Scan => "Scan",
            Self::BatchGetItem => "BatchGetItem",
            Self::BatchWriteItem => "BatchWriteItem",
        }
    }

    /// Parse an operation name string into an `Operation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GetItem" => Some(Self::GetItem),
            "PutItem" => Some(Self::PutItem),
            "DeleteItem" => Some(Self::DeleteItem),
            "Query" => Some(Self::Query),
            "Scan" => Some(Self::Scan),
            "BatchGetItem" => Some(Self::BatchGetItem),
            "BatchWriteItem" => Some(Self::BatchWriteItem),
            _ => None,
        }
    }

    /// Returns `true` if this operation mutates the store.
    #[must_use]
    pub fn is_write(&self) -> bool {
        matches!(self, Self::PutItem | Self::DeleteItem | Self::BatchWriteItem)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

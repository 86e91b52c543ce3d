//! Integration tests for the sparkplug document client.
//!
//! The client runs against [`memory::MemoryStore`], an in-process transport
//! that implements the store's wire protocol, so the full request path is
//! exercised: expression deconstruction, serialization, dispatch, and
//! response normalization.

use std::sync::{Arc, Once};

use serde_json::Value;

use sparkplug::Client;


use memory::MemoryStore;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A fresh store with the two tables the tests use: `accounts` keyed on
/// `email` with a `name` index, and `organizations` keyed on `name`.
#[must_use]
pub fn store() -> Arc<MemoryStore> {
    init_tracing();

    let store = MemoryStore::new();
    store.create_table("accounts", "email");
    store.create_index("accounts", "name", "name");
    store.create_table("organizations", "name");
    store
}

/// A client over the given store.
#[must_use]
pub fn client(store: &Arc<MemoryStore>) -> Client {
    Client::new(Arc::clone(store) as _)
}

/// Shorthand for building an item/key/filter map from a JSON literal.
///
/// # Panics
/// Panics if the literal is not a JSON object.
#[must_use]
pub fn obj(value: Value) -> serde_json::Map<String, Value> {
    value.as_object().cloned().expect("object literal")
}

mod test_batch;
mod test_query_scan;

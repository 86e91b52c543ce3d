//! Sparkplug: a thin document client for a DynamoDB-style store.
//!
//! The client translates plain key/value filter objects into the store's
//! placeholder-based expression syntax, accumulates per-table operations into
//! the store's batched request shapes, and flattens the store's responses
//! into a predictable [`Outcome`](response::Outcome).
//!
//! The network transport is pluggable: anything implementing
//! [`Transport`](transport::Transport) can back a [`Client`](client::Client).
//!
//! ```no_run
//! use std::sync::Arc;
//! # use sparkplug::transport::{Transport, TransportFuture};
//! # use sparkplug_model::Operation;
//! # struct Http;
//! # impl Transport for Http {
//! #     fn send(&self, _: Operation, _: bytes::Bytes) -> TransportFuture { unimplemented!() }
//! # }
//! use serde_json::json;
//! use sparkplug::Client;
//!
//! # async fn run() -> Result<(), sparkplug::Error> {
//! let client = Client::new(Arc::new(Http));
//! let accounts = client.table("accounts");
//! accounts
//!     .put(json!({"email": "a@x.com", "name": "A"}).as_object().cloned().unwrap())
//!     .await?;
//! let resp = accounts
//!     .get(json!({"email": "a@x.com"}).as_object().cloned().unwrap())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod expression;
pub mod response;
pub mod table;
pub mod transport;


pub use batch::{Batch, BatchOutcome, OneOrMany};
pub use builder::{Query, Scan};
pub use client::Client;
pub use config::Config;
pub use error::Error;
pub use expression::{Expression, ExpressionSlot, Filter, Fragment};
pub use response::{Data, Outcome};
pub use table::Table;

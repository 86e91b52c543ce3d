//! Wire-protocol model types for the Sparkplug document client.
//!
//! These types describe the JSON request and response shapes the client
//! exchanges with the remote store (`awsJson1_0`-style, `PascalCase` field
//! names). Attribute values are carried opaquely as [`serde_json::Value`];
//! the client never interprets them.
#![allow(clippy::module_name_repetitions)]

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use operations::Operation;
pub use output::RawResponse;
pub use types::{Item, Key, WriteRequest};

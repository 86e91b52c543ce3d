//! Error types for the client.
//!
//! There is no local recovery anywhere in this crate: every failure surfaces
//! to the immediate caller of the call that triggered it, and transport
//! errors are never retried, wrapped, or reclassified. "No matching item" is
//! not an error; it is an absent `data` field on the normalized outcome.

use crate::transport::TransportError;

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A failure reported by the transport or the remote store, carried
    /// verbatim.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A request or response body failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

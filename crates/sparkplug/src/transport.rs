//! The boundary between the client and the remote store.
//!
//! The client builds a JSON payload per operation and hands it to a
//! [`Transport`]; everything network-related (connection handling, retries,
//! backoff, authentication) lives behind that trait. Errors coming out of a
//! transport are delivered to callers unmodified.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use serde::Serialize;

use sparkplug_model::Operation;
use sparkplug_model::output::RawResponse;

use crate::error::Error;
use crate::response::{Outcome, normalize};

/// The future type returned by [`Transport::send`].
pub type TransportFuture = Pin<Box<dyn Future<Output = Result<Bytes, TransportError>> + Send>>;

/// A connection to the remote store.
///
/// `send` submits one operation with its serialized JSON request body and
/// resolves with the raw JSON response body. Implementations decide how the
/// request reaches the store; the client never inspects anything but the
/// bytes that come back.
pub trait Transport: Send + Sync + 'static {
    /// Submit one operation and resolve with the raw response body.
    fn send(&self, op: Operation, payload: Bytes) -> TransportFuture;
}

/// A failure reported by a [`Transport`].
///
/// Carries the remote store's error code verbatim when one was received
/// (e.g. `ResourceNotFoundException`), or no code for connection-level
/// failures.
#[derive(Debug)]
pub struct TransportError {
    /// The remote error code, if the store rejected the request.
    pub code: Option<String>,
    /// A human-readable message.
    pub message: String,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// A rejection reported by the remote store.
    #[must_use]
    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            source: None,
        }
    }

    /// A connection-level failure with no remote error code.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => write!(f, "transport failure: {}", self.message),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Serialize an input, submit it, and normalize the response.
pub(crate) async fn dispatch<I: Serialize>(
    transport: &dyn Transport,
    op: Operation,
    input: &I,
) -> Result<Outcome, Error> {
    let payload = Bytes::from(serde_json::to_vec(input)?);
    tracing::debug!(operation = %op, bytes = payload.len(), "sending request");
    let body = transport.send(op, payload).await?;
    let raw: RawResponse = serde_json::from_slice(&body)?;
    Ok(normalize(raw))
}

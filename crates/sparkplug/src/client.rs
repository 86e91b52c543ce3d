//! The client entry point.

use std::fmt;
use std::sync::Arc;

use crate::batch::Batch;
use crate::table::Table;
use crate::transport::Transport;

/// The top-level handle to a store.
///
/// Clones share the underlying transport. Constructing a client performs no
/// I/O; connections are the transport's business.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// A handle to the named table.
    #[must_use]
    pub fn table(&self, name: impl Into<String>) -> Table {
        Table::new(name.into(), Arc::clone(&self.transport))
    }

    /// An empty batch accumulator.
    #[must_use]
    pub fn batch(&self) -> Batch {
        Batch::new(Arc::clone(&self.transport))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

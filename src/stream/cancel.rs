//! Cooperative cancellation for entity streams.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag for a running entity stream.
///
/// Clones share the underlying flag, so any clone can stop the stream.
/// The flag is checked before each item is handed over; an item already
/// in flight is still delivered.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Creates a fresh, un-cancelled handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the stream stop before the next item is sent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Returns true once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

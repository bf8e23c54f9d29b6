//! In-memory calculation history.

use async_trait::async_trait;
use tokio::sync::RwLock;

use sip_core::domain::{DEFAULT_HISTORY_CAPACITY, HistoryEntry, HistoryRing};
use sip_core::ports::HistoryStore;

/// Process-local history ring. Lost on restart.
pub struct InMemoryHistory {
    ring: RwLock<HistoryRing>,
    capacity: usize,
}

impl InMemoryHistory {
    /// `capacity` is clamped the same way [`HistoryRing::new`] clamps it.
    pub fn new(capacity: usize) -> Self {
        let ring = HistoryRing::new(capacity);
        Self {
            capacity: ring.capacity(),
            ring: RwLock::new(ring),
        }
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistory {
    async fn record(&self, entry: HistoryEntry) {
        tracing::debug!(expression = %entry.expression, "Recording calculation");
        self.ring.write().await.record(entry);
    }

    async fn list(&self) -> Vec<HistoryEntry> {
        self.ring.read().await.to_vec()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

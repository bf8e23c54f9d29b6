//! Calculation history port.

use async_trait::async_trait;

use crate::domain::HistoryEntry;

/// Bounded, newest-first record of calculations.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Record an entry at the front, evicting the oldest past capacity.
    async fn record(&self, entry: HistoryEntry);

    /// All entries, newest first.
    async fn list(&self) -> Vec<HistoryEntry>;

    fn capacity(&self) -> usize;
}

//! Application state - shared across all handlers.

use std::sync::Arc;

use sip_core::ports::HistoryStore;
use sip_infra::InMemoryHistory;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<dyn HistoryStore>,
}

impl AppState {
    pub fn new(history_capacity: usize) -> Self {
        let history = InMemoryHistory::new(history_capacity);
        if history.capacity() < history_capacity {
            tracing::warn!(
                requested = history_capacity,
                capacity = history.capacity(),
                "HISTORY_CAPACITY above the maximum, clamped"
            );
        }
        tracing::info!(capacity = history.capacity(), "Calculation history kept in memory");

        Self {
            history: Arc::new(history),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_capacity_is_clamped() {
        assert_eq!(AppState::new(60).history.capacity(), 50);
        assert_eq!(AppState::new(10).history.capacity(), 10);
    }
}

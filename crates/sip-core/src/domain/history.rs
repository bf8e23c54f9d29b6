use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::calculator::CalcValue;

/// Number of calculations kept. Also the upper bound for a configured capacity.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A recorded calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: CalcValue,
    pub time: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(expression: impl Into<String>, result: CalcValue) -> Self {
        Self {
            expression: expression.into(),
            result,
            time: Utc::now(),
        }
    }
}

/// Fixed-capacity history, newest entry first.
///
/// Recording past capacity drops the oldest entry, so index 0 is always
/// the most recent calculation.
#[derive(Debug, Clone)]
pub struct HistoryRing {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryRing {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryRing {
    /// A ring holding at most `capacity` entries, clamped to
    /// [`DEFAULT_HISTORY_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(DEFAULT_HISTORY_CAPACITY);
        Self {
            entries: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

//! Bounded, FIFO-evicting history of completed generations.

use std::collections::VecDeque;

use crate::types::HistoryRecord;

/// How many records a session retains.
pub const HISTORY_CAPACITY: usize = 50;

/// Insertion-ordered record sequence bounded at a fixed capacity.
///
/// The bound exists purely to cap memory and display growth over a long
/// interactive session; when full, the oldest records are evicted first.
/// After any mutation `len() <= capacity()` holds.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    records: VecDeque<HistoryRecord>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    /// Empty buffer with the standard capacity of [`HISTORY_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Empty buffer with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(HISTORY_CAPACITY) + 1),
            capacity,
        }
    }

    /// Insert a record at the logical end (most recent last), evicting
    /// from the front until the capacity bound holds again. Total: any
    /// well-formed record is accepted, empty fields included.
    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// Reset to empty. Idempotent.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The last `min(k, len)` records, most recent first.
    pub fn recent(&self, k: usize) -> Vec<&HistoryRecord> {
        self.records.iter().rev().take(k).collect()
    }

    /// The most recently appended record, if any.
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.back()
    }

    /// All retained records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

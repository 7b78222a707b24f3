//! Unbounded, deduplicated collection of pinned records.

use crate::types::HistoryRecord;

/// Records the user has pinned for the lifetime of the session.
///
/// Unlike the history buffer there is no capacity bound and no eviction;
/// saving is deduplicated by value, so pinning the same record twice is a
/// no-op. Favorites hold their own copies and are unaffected by history
/// eviction or a history clear.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    records: Vec<HistoryRecord>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a copy of `record`. Returns `false` if an equal record is
    /// already pinned.
    pub fn save(&mut self, record: &HistoryRecord) -> bool {
        if self.records.contains(record) {
            return false;
        }
        self.records.push(record.clone());
        true
    }

    /// All pinned records, in the order they were saved.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

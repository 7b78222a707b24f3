//! In-memory session state: bounded history, favorites, and the
//! request ticket protocol that keeps stale generation results out of
//! both.
//!
//! A [`SessionContext`] lives exactly as long as its session; nothing
//! here is persisted. Callers that want durable state (preferences,
//! exported files) use [`crate::config`] and [`crate::export`].

mod favorites;
mod history;

pub use favorites::Favorites;
pub use history::{HistoryBuffer, HISTORY_CAPACITY};

use std::collections::HashMap;

use uuid::Uuid;

use crate::types::{HistoryRecord, Language};

/// Ticket identifying one generation request within a session.
///
/// Tickets are issued by [`SessionContext::begin_request`] and are only
/// honored while they are still the session's current request. A later
/// `begin_request` or an explicit [`SessionContext::cancel_request`]
/// invalidates all previously issued tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// Per-session state for an interactive generation loop.
#[derive(Debug)]
pub struct SessionContext {
    id: Uuid,
    history: HistoryBuffer,
    favorites: Favorites,
    next_request: u64,
    current_request: Option<u64>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: HistoryBuffer::new(),
            favorites: Favorites::new(),
            next_request: 0,
            current_request: None,
        }
    }

    /// Session with a non-standard history bound. Mostly useful in tests.
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            history: HistoryBuffer::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Start a new generation request, superseding any request still in
    /// flight. The returned ticket must be presented when the result
    /// arrives; see [`record_generation`](Self::record_generation).
    pub fn begin_request(&mut self) -> RequestId {
        self.next_request += 1;
        self.current_request = Some(self.next_request);
        RequestId(self.next_request)
    }

    /// Drop the current request without starting a new one. Results for
    /// its ticket will be discarded when they arrive.
    pub fn cancel_request(&mut self) {
        self.current_request = None;
    }

    /// Whether `ticket` still names the session's current request.
    pub fn is_current(&self, ticket: RequestId) -> bool {
        self.current_request == Some(ticket.0)
    }

    /// Commit a finished generation to history, or discard it.
    ///
    /// Returns `true` and appends only if `ticket` is still current; a
    /// stale ticket means the request was canceled or superseded while
    /// the call was in flight, and its record is dropped without any
    /// state change. A committed ticket is consumed, so the same result
    /// cannot be recorded twice.
    pub fn record_generation(&mut self, ticket: RequestId, record: HistoryRecord) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.current_request = None;
        self.history.append(record);
        true
    }

    /// Clear generation history. Favorites and any in-flight request are
    /// untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Pin a record. Returns `false` if an equal record is already
    /// pinned. The record does not need to be present in history.
    pub fn save_favorite(&mut self, record: &HistoryRecord) -> bool {
        self.favorites.save(record)
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Language of the most recent generation, if any.
    pub fn last_language(&self) -> Option<&Language> {
        self.history.latest().map(|r| &r.language)
    }

    /// The language appearing most often in retained history. Ties go to
    /// the language used most recently.
    pub fn most_used_language(&self) -> Option<Language> {
        let mut stats: HashMap<&Language, (usize, usize)> = HashMap::new();
        for (position, record) in self.history.iter().enumerate() {
            let entry = stats.entry(&record.language).or_insert((0, 0));
            entry.0 += 1;
            entry.1 = position;
        }
        stats
            .into_iter()
            .max_by_key(|(_, (count, last_seen))| (*count, *last_seen))
            .map(|(language, _)| language.clone())
    }
}

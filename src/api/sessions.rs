use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::tools::ToolState;

/// Sessions kept before the least recently used one is dropped.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct SessionSlot {
    touched: u64,
    state: ToolState,
}

/// In-memory tool state keyed by session id, bounded by `max_sessions`.
pub struct SessionStore {
    slots: DashMap<String, SessionSlot>,
    clock: AtomicU64,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            slots: DashMap::new(),
            clock: AtomicU64::new(0),
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, session_id: &str) -> Option<ToolState> {
        self.slots.get(session_id).map(|slot| slot.state.clone())
    }

    /// Applies one finished tool call to a session, creating it if needed.
    ///
    /// The update happens under the entry guard, so concurrent calls on the
    /// same session each land their queries in the history.
    pub fn record(&self, session_id: &str, queries: &[String], result: String) -> ToolState {
        if !self.slots.contains_key(session_id) && self.slots.len() >= self.max_sessions {
            self.evict_oldest();
        }

        let touched = self.clock.fetch_add(1, Ordering::Relaxed);
        let mut slot = self
            .slots
            .entry(session_id.to_string())
            .or_insert_with(|| SessionSlot {
                touched,
                state: ToolState::default(),
            });
        slot.touched = touched;
        slot.state.record(queries, result);
        slot.state.clone()
    }

    fn evict_oldest(&self) {
        let oldest = self
            .slots
            .iter()
            .min_by_key(|slot| slot.touched)
            .map(|slot| slot.key().clone());

        if let Some(session_id) = oldest {
            tracing::debug!(%session_id, "evicting least recently used session");
            self.slots.remove(&session_id);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS)
    }
}

//! Active session registry.
//!
//! One entry per channel with a running game. Shared across all
//! concurrently running sessions; creation is atomic with respect to the
//! "does this channel already have an active session" check, so two
//! timers can never race for the same channel key.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use tokio::sync::mpsc;

use crate::application::services::session_engine::SessionEvent;
use crate::domain::GameSession;

/// Live handle to a running session: the owner for upstream filtering,
/// the shared state for status queries, and the engine's event inlet.
pub struct SessionHandle {
    pub owner_id: i64,
    pub session: Arc<RwLock<GameSession>>,
    pub events: mpsc::UnboundedSender<SessionEvent>,
}

/// Per-channel registry of active sessions.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<i64, SessionHandle>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Atomic create-if-absent. Returns false when the channel already
    /// has an active session; nothing is replaced in that case.
    pub fn try_insert(&self, channel_id: i64, handle: SessionHandle) -> bool {
        match self.sessions.entry(channel_id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(handle);
                true
            }
        }
    }

    /// Drop the channel's entry, if any. Called by the engine on
    /// termination.
    pub fn remove(&self, channel_id: i64) {
        self.sessions.remove(&channel_id);
    }

    pub fn is_active(&self, channel_id: i64) -> bool {
        self.sessions.contains_key(&channel_id)
    }

    /// Owner of the channel's active session.
    pub fn owner_of(&self, channel_id: i64) -> Option<i64> {
        self.sessions.get(&channel_id).map(|h| h.owner_id)
    }

    /// Display string and seconds remaining, for status queries.
    pub fn status_of(&self, channel_id: i64) -> Option<(String, u32)> {
        self.sessions.get(&channel_id).map(|h| {
            let session = h.session.read();
            (session.display.clone(), session.time_remaining_secs)
        })
    }

    /// Forward an event into the channel's engine. Returns false when no
    /// session is active or the engine is gone.
    pub fn send_event(&self, channel_id: i64, event: SessionEvent) -> bool {
        self.sessions
            .get(&channel_id)
            .map(|h| h.events.send(event).is_ok())
            .unwrap_or(false)
    }

    /// Number of channels with an active session.
    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn handle(owner_id: i64) -> SessionHandle {
        let anagrams: HashSet<String> = ["cat", "act"].iter().map(|w| w.to_string()).collect();
        let session = GameSession::new(1, owner_id, "cat".into(), "tca".into(), anagrams, 60);
        let (tx, _rx) = mpsc::unbounded_channel();
        SessionHandle {
            owner_id,
            session: Arc::new(RwLock::new(session)),
            events: tx,
        }
    }

    #[test]
    fn test_second_insert_on_busy_channel_rejected() {
        let registry = SessionRegistry::new();
        assert!(registry.try_insert(1, handle(10)));
        assert!(!registry.try_insert(1, handle(20)));
        // first session's owner survives
        assert_eq!(registry.owner_of(1), Some(10));
    }

    #[test]
    fn test_remove_frees_the_channel() {
        let registry = SessionRegistry::new();
        assert!(registry.try_insert(1, handle(10)));
        registry.remove(1);
        assert!(!registry.is_active(1));
        assert!(registry.try_insert(1, handle(20)));
    }

    #[test]
    fn test_status_reads_session_state() {
        let registry = SessionRegistry::new();
        registry.try_insert(1, handle(10));

        let (display, secs) = registry.status_of(1).unwrap();
        assert_eq!(display, "tca");
        assert_eq!(secs, 60);
        assert!(registry.status_of(2).is_none());
    }
}

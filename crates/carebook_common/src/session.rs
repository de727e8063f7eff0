// --- File: crates/carebook_common/src/session.rs ---
//! In-memory, per-visitor session store.
//!
//! Sessions live only in this process. Each one sits behind its own async
//! mutex so that events from one visitor are handled one at a time.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

struct Slot<S> {
    state: Arc<Mutex<S>>,
    last_seen: Instant,
}

pub struct SessionStore<S> {
    sessions: Arc<RwLock<HashMap<Uuid, Slot<S>>>>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
        }
    }
}

impl<S> Default for SessionStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SessionStore<S> {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Looks up `id`, or creates a new session with `init` when it is absent
    /// or unknown. Returns the id actually in use and whether it was created.
    pub async fn get_or_create<F>(&self, id: Option<Uuid>, init: F) -> (Uuid, Arc<Mutex<S>>, bool)
    where
        F: FnOnce() -> S,
    {
        let mut sessions = self.sessions.write().await;

        if let Some(id) = id {
            if let Some(slot) = sessions.get_mut(&id) {
                slot.last_seen = Instant::now();
                return (id, slot.state.clone(), false);
            }
        }

        let id = Uuid::new_v4();
        let state = Arc::new(Mutex::new(init()));
        sessions.insert(
            id,
            Slot {
                state: state.clone(),
                last_seen: Instant::now(),
            },
        );
        debug!(session = %id, "created visitor session");
        (id, state, true)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drops every session not seen for longer than `idle`. Returns how many were dropped.
    pub async fn purge_idle(&self, idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, slot| slot.last_seen.elapsed() <= idle);
        let purged = before - sessions.len();
        if purged > 0 {
            debug!("purged {} idle visitor sessions", purged);
        }
        purged
    }
}

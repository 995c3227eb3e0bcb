//! In-memory implementation of the SessionStore trait.

use super::{Session, SessionStore};
use async_trait::async_trait;
use chrono::Duration;
use directory_core::{Clock, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

type SessionMap = HashMap<String, Session>;

/// Sessions held in process memory with an inactivity window checked on every read.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<SessionMap>>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl InMemorySessionStore {
    pub fn new(clock: Arc<dyn Clock>, timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(SessionMap::new())),
            clock,
            timeout,
        }
    }

    /// Number of stored sessions, stale ones included until they are read or purged.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops every expired session; returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let cutoff = self.clock.now() - self.timeout;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.updated_at >= cutoff);
        let removed = before - sessions.len();
        if removed > 0 {
            info!(removed, "Purged expired sessions");
        }
        removed
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, sender_id: &str) -> Result<Option<Session>> {
        let cutoff = self.clock.now() - self.timeout;
        {
            let sessions = self.sessions.read().await;
            match sessions.get(sender_id) {
                None => return Ok(None),
                Some(session) if session.updated_at >= cutoff => return Ok(Some(session.clone())),
                Some(_) => {}
            }
        }

        let mut sessions = self.sessions.write().await;
        // Re-check: a put may have refreshed it between the two locks.
        if let Some(session) = sessions.get(sender_id) {
            if session.updated_at >= cutoff {
                return Ok(Some(session.clone()));
            }
            sessions.remove(sender_id);
            debug!(sender_id = %sender_id, "Expired session cleared on read");
        }
        Ok(None)
    }

    async fn put(&self, session: Session) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.sender_id.clone(), session);
        Ok(())
    }

    async fn delete(&self, sender_id: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(sender_id);
        Ok(())
    }
}

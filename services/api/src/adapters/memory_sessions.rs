//! services/api/src/adapters/memory_sessions.rs
//!
//! In-memory implementation of the `SessionStore` port. Nothing survives a
//! restart; each visitor gets an isolated entry keyed by session id.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use nordic_explorer_core::ports::{PortResult, SessionStore};
use nordic_explorer_core::session::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn initialize_if_absent(&self, id: Uuid, now: DateTime<Utc>) -> PortResult<Session> {
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions
            .get_mut(&id)
            .filter(|session| !session.is_expired(now, self.ttl))
        {
            session.touch(now);
            return Ok(session.clone());
        }

        debug!(session_id = %id, "Initializing session");
        let session = Session::new(id, now);
        sessions.insert(id, session.clone());
        Ok(session)
    }

    async fn get(&self, id: Uuid, now: DateTime<Utc>) -> PortResult<Option<Session>> {
        let sessions = self.sessions.lock().await;
        Ok(sessions
            .get(&id)
            .filter(|session| !session.is_expired(now, self.ttl))
            .cloned())
    }

    async fn save(&self, session: Session) -> PortResult<()> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session.id, session);
        Ok(())
    }

    async fn end(&self, id: Uuid) -> PortResult<bool> {
        let mut sessions = self.sessions.lock().await;
        Ok(sessions.remove(&id).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> PortResult<usize> {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, self.ttl));
        Ok(before - sessions.len())
    }
}

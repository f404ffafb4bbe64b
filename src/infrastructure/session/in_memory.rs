//! In-memory session store

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::domain::session::{Exchange, SessionId, SessionStore};
use crate::domain::DomainError;

/// Process-lifetime session store keyed by session id
///
/// The outer map is only locked to resolve a session entry; each
/// history sits behind its own mutex so appends for one session never
/// serialize unrelated sessions.
pub struct InMemorySessionStore {
    max_history: usize,
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<VecDeque<Exchange>>>>>,
}

impl InMemorySessionStore {
    /// Create a new store retaining at most `max_history` exchanges
    /// per session
    pub fn new(max_history: usize) -> Self {
        Self {
            max_history,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Number of known sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn entry(&self, id: &SessionId) -> Arc<Mutex<VecDeque<Exchange>>> {
        if let Some(history) = self.sessions.read().await.get(id) {
            return history.clone();
        }

        // Slow path: allocate under the write lock, racing inserts
        // resolve to whichever entry landed first.
        self.sessions
            .write()
            .await
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(VecDeque::new())))
            .clone()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(&self) -> Result<SessionId, DomainError> {
        let id = SessionId::generate();

        self.sessions
            .write()
            .await
            .insert(id.clone(), Arc::new(Mutex::new(VecDeque::new())));

        debug!(session_id = %id, "Created session");
        Ok(id)
    }

    async fn get_conversation_history(&self, id: &SessionId) -> Result<Vec<Exchange>, DomainError> {
        let entry = { self.sessions.read().await.get(id).cloned() };

        // Unknown ids read as fresh sessions
        let Some(history) = entry else {
            return Ok(Vec::new());
        };

        let history = history.lock().await;
        Ok(history.iter().cloned().collect())
    }

    async fn add_exchange(
        &self,
        id: &SessionId,
        query: &str,
        answer: &str,
    ) -> Result<(), DomainError> {
        let entry = self.entry(id).await;
        let mut history = entry.lock().await;

        history.push_back(Exchange::new(query, answer));

        while history.len() > self.max_history {
            history.pop_front();
        }

        Ok(())
    }
}

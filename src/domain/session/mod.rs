//! Conversation sessions and the session store port

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Opaque session identifier
///
/// Freshly minted ids are UUID v4, but any non-empty string supplied
/// by a client is accepted as-is; unknown ids behave like fresh
/// sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(DomainError::validation("session id cannot be empty"));
        }

        Ok(Self(id))
    }

    /// Mint a fresh unique identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

/// One (query, answer) pair recorded into a session's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub query: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl Exchange {
    /// Create a new exchange stamped with the current time
    pub fn new(query: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            answer: answer.into(),
            created_at: Utc::now(),
        }
    }
}

/// Port for session state
///
/// Histories are bounded FIFO sequences; implementations evict the
/// oldest exchange once the configured maximum is exceeded. Unknown
/// session ids are never an error - they read as empty histories.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Mint a fresh session id and allocate an empty history for it
    async fn create_session(&self) -> Result<SessionId, DomainError>;

    /// Read the recorded history for a session, oldest first
    async fn get_conversation_history(&self, id: &SessionId) -> Result<Vec<Exchange>, DomainError>;

    /// Append an exchange to a session's history
    async fn add_exchange(
        &self,
        id: &SessionId,
        query: &str,
        answer: &str,
    ) -> Result<(), DomainError>;
}

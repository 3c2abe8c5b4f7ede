use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::SessionId;

/// Storage for per-session state, keyed by [`SessionId`].
///
/// The only value a session carries is the bearer token. Implementations
/// must make a single session's reads and writes safe under concurrent
/// requests; when two writes race the last one wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates an empty session and returns its identifier.
    async fn create(&self) -> SessionId;

    /// Whether the session exists and has not expired.
    async fn exists(&self, id: &SessionId) -> bool;

    /// Returns the non-empty access token of a live session.
    async fn access_token(&self, id: &SessionId) -> Option<String>;

    /// Stores `token` on the session, creating the entry if it is gone.
    async fn set_access_token(&self, id: &SessionId, token: String);

    /// Removes the session. Unknown identifiers are ignored.
    async fn destroy(&self, id: &SessionId);
}

#[derive(Debug, Clone)]
struct Entry {
    access_token: Option<String>,
    expires_at: i64,
}

/// Process-local session store.
///
/// Entries expire `ttl` after their last write. Expired entries are treated
/// as absent and purged whenever a new session is created.
pub struct MemorySessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<SessionId, Entry>>,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        let now = Utc::now().timestamp();
        let sessions = self.sessions.lock().await;
        sessions.values().filter(|e| e.expires_at > now).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn expiry(&self) -> i64 {
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        Utc::now().timestamp().saturating_add(ttl)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self) -> SessionId {
        let now = Utc::now().timestamp();
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, e| e.expires_at > now);

        let mut id = SessionId::generate();
        while sessions.contains_key(&id) {
            id = SessionId::generate();
        }
        sessions.insert(
            id.clone(),
            Entry {
                access_token: None,
                expires_at: self.expiry(),
            },
        );
        id
    }

    async fn exists(&self, id: &SessionId) -> bool {
        let now = Utc::now().timestamp();
        let sessions = self.sessions.lock().await;
        sessions.get(id).is_some_and(|e| e.expires_at > now)
    }

    async fn access_token(&self, id: &SessionId) -> Option<String> {
        let now = Utc::now().timestamp();
        let sessions = self.sessions.lock().await;
        sessions
            .get(id)
            .filter(|e| e.expires_at > now)
            .and_then(|e| e.access_token.clone())
            .filter(|t| !t.is_empty())
    }

    async fn set_access_token(&self, id: &SessionId, token: String) {
        let expires_at = self.expiry();
        let mut sessions = self.sessions.lock().await;
        let entry = sessions.entry(id.clone()).or_insert(Entry {
            access_token: None,
            expires_at,
        });
        entry.access_token = Some(token);
        entry.expires_at = expires_at;
    }

    async fn destroy(&self, id: &SessionId) {
        self.sessions.lock().await.remove(id);
    }
}

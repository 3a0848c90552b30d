use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::common::Session;
use crate::domains::generation::actions::remove_image;

/// Session token (random UUID, kept in the cookie session)
pub type SessionToken = String;

/// A session locked for the duration of one user action.
pub type SharedSession = Arc<Mutex<Session>>;

struct Entry {
    session: SharedSession,
    created_at: DateTime<Utc>,
}

/// In-memory session store
///
/// Sessions expire after `ttl_hours`; expired sessions are torn down
/// (including their generated image) by `cleanup_expired`.
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionToken, Entry>>,
    ttl_hours: i64,
}

impl SessionStore {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl_hours,
        }
    }

    /// Create a fresh, empty session and return its token
    pub async fn create_session(&self) -> (SessionToken, SharedSession) {
        let token = Uuid::new_v4().to_string();
        let session = Arc::new(Mutex::new(Session::new()));
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            token.clone(),
            Entry {
                session: session.clone(),
                created_at: Utc::now(),
            },
        );
        (token, session)
    }

    /// Get session by token
    pub async fn get_session(&self, token: &str) -> Option<SharedSession> {
        let sessions = self.sessions.read().await;
        let entry = sessions.get(token)?;

        if self.is_expired(entry.created_at, Utc::now()) {
            return None;
        }

        Some(entry.session.clone())
    }

    /// Tear a session down (logout)
    pub async fn delete_session(&self, token: &str) {
        let removed = self.sessions.write().await.remove(token);
        if let Some(entry) = removed {
            teardown(entry.session).await;
        }
    }

    /// Tear down expired sessions (run periodically)
    pub async fn cleanup_expired(&self) -> usize {
        let now = Utc::now();
        let expired: Vec<Entry> = {
            let mut sessions = self.sessions.write().await;
            let tokens: Vec<SessionToken> = sessions
                .iter()
                .filter(|(_, entry)| self.is_expired(entry.created_at, now))
                .map(|(token, _)| token.clone())
                .collect();
            tokens
                .iter()
                .filter_map(|token| sessions.remove(token))
                .collect()
        };

        let count = expired.len();
        for entry in expired {
            teardown(entry.session).await;
        }
        count
    }

    pub fn ttl_hours(&self) -> i64 {
        self.ttl_hours
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn is_expired(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(created_at).num_hours() >= self.ttl_hours
    }

    #[cfg(test)]
    async fn backdate(&self, token: &str, hours: i64) {
        if let Some(entry) = self.sessions.write().await.get_mut(token) {
            entry.created_at = Utc::now() - chrono::Duration::hours(hours);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(24)
    }
}

async fn teardown(session: SharedSession) {
    let image = session.lock().await.clear_content();
    if let Some(path) = image {
        remove_image(&path).await;
    }
}

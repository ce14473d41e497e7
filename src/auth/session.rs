use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use super::AuthenticatedUser;

/// Sessions live this long after login, matching the original cookie age.
pub const SESSION_TTL_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: AuthenticatedUser,
    pub expires_at: DateTime<Utc>,
}

/// In-memory bearer-token sessions. Tokens are ULIDs; expired entries are
/// dropped lazily when resolved.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn issue(&self, user: AuthenticatedUser) -> Session {
        let session = Session {
            token: ulid::Ulid::new().to_string(),
            user,
            expires_at: Utc::now() + Duration::days(SESSION_TTL_DAYS),
        };
        let mut inner = self.inner.write().await;
        inner.insert(session.token.clone(), session.clone());
        session
    }

    pub async fn resolve(&self, token: &str) -> Option<Session> {
        let mut inner = self.inner.write().await;
        match inner.get(token) {
            Some(session) if session.expires_at > Utc::now() => Some(session.clone()),
            Some(_) => {
                inner.remove(token);
                None
            }
            None => None,
        }
    }

    pub async fn revoke(&self, token: &str) {
        self.inner.write().await.remove(token);
    }
}

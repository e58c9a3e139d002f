//! Domain entity representing a login session.

use chrono::{DateTime, Utc};

/// Server-side session state.
///
/// The cookie carries a random key; only its keyed hash is stored. `auth_hash`
/// is derived from the user's password hash, so a password change made from
/// another session invalidates this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub key_hash: String,
    pub user_id: i64,
    pub auth_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Returns true once the session is past its expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Input data for creating a session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub key_hash: String,
    pub user_id: i64,
    pub auth_hash: String,
    pub expires_at: DateTime<Utc>,
}

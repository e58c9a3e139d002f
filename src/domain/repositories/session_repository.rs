//! Repository trait for login sessions.

use crate::domain::entities::{NewSession, Session};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for server-side sessions.
///
/// Sessions are addressed by the keyed hash of the cookie value; raw keys are
/// never persisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError>;

    async fn find(&self, key_hash: &str) -> Result<Option<Session>, AppError>;

    /// Replaces the auth hash of a session after its user's password changed.
    async fn update_auth_hash(&self, key_hash: &str, auth_hash: &str) -> Result<(), AppError>;

    /// Deletes a session. Deleting an unknown session is not an error.
    async fn delete(&self, key_hash: &str) -> Result<(), AppError>;

    /// Deletes every expired session and returns how many were removed.
    async fn delete_expired(&self) -> Result<u64, AppError>;
}

//! PostgreSQL implementation of session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewSession, Session};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct SessionRow {
    key_hash: String,
    user_id: i64,
    auth_hash: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            key_hash: row.key_hash,
            user_id: row.user_id,
            auth_hash: row.auth_hash,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}

/// PostgreSQL repository for login sessions.
///
/// Stores keyed hashes of session keys. Raw keys are never persisted.
pub struct PgSessionRepository {
    pool: Arc<PgPool>,
}

impl PgSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO sessions (key_hash, user_id, auth_hash, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING key_hash, user_id, auth_hash, created_at, expires_at
            "#,
        )
        .bind(new_session.key_hash)
        .bind(new_session.user_id)
        .bind(new_session.auth_hash)
        .bind(new_session.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find(&self, key_hash: &str) -> Result<Option<Session>, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT key_hash, user_id, auth_hash, created_at, expires_at
            FROM sessions
            WHERE key_hash = $1
            "#,
        )
        .bind(key_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn update_auth_hash(&self, key_hash: &str, auth_hash: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE sessions SET auth_hash = $2 WHERE key_hash = $1")
            .bind(key_hash)
            .bind(auth_hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete(&self, key_hash: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE key_hash = $1")
            .bind(key_hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}

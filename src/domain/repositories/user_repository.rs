//! Repository trait for user accounts and their permissions.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError>;

    /// Creates a user and grants it the given permission codenames atomically.
    ///
    /// Either the user row and every grant are persisted, or nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    /// Returns [`AppError::Internal`] if a codename is unknown; the user is not
    /// created in that case.
    async fn create_with_permissions(
        &self,
        new_user: NewUser,
        permissions: Vec<String>,
    ) -> Result<User, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Replaces the stored password hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), AppError>;

    /// Sets `last_login` to the current time.
    async fn touch_last_login(&self, id: i64) -> Result<(), AppError>;

    /// Returns the permission codenames granted to a user, sorted.
    async fn permissions(&self, user_id: i64) -> Result<Vec<String>, AppError>;

    /// Lists every user ordered by username.
    async fn list(&self) -> Result<Vec<User>, AppError>;
}

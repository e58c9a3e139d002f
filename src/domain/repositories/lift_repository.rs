//! Repository trait for lifts.

use crate::domain::entities::{Lift, NewLift};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for lifts.
///
/// Lifts are private: listing is always scoped to one owner.
///
/// # Examples
///
/// See integration tests: `tests/repository_lift.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LiftRepository: Send + Sync {
    /// Inserts a lift.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user or exercise does not exist.
    async fn create(&self, new_lift: NewLift) -> Result<Lift, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Lift>, AppError>;

    /// Lists the lifts owned by `user_id`, most recent date first
    /// (`date DESC, id DESC`).
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Lift>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}

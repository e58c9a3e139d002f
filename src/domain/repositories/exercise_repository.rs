//! Repository trait for exercises.

use crate::domain::entities::{Exercise, NewExercise};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for exercises.
///
/// No uniqueness is imposed on exercise names.
///
/// # Examples
///
/// See integration tests: `tests/repository_exercise.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Creates a new exercise stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `created_by` references no user.
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Exercise>, AppError>;

    /// Lists every exercise, newest first (`date_created DESC, id DESC`).
    async fn list(&self) -> Result<Vec<Exercise>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}

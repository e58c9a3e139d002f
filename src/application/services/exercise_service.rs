//! Exercise service.

use crate::domain::entities::{Exercise, NewExercise, User};
use crate::domain::repositories::ExerciseRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for the shared exercise catalogue.
///
/// Every authenticated user sees every exercise. Names are not deduplicated.
pub struct ExerciseService<R: ExerciseRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ExerciseRepository + ?Sized> ExerciseService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every exercise, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<Exercise>, AppError> {
        self.repository.list().await
    }

    /// Creates an exercise attributed to `creator`.
    ///
    /// The name is expected to be validated by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the creator no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, name: String, creator: &User) -> Result<Exercise, AppError> {
        let exercise = self
            .repository
            .create(NewExercise {
                name,
                created_by: creator.id,
            })
            .await?;

        tracing::info!(
            exercise_id = exercise.id,
            user_id = creator.id,
            "Exercise created"
        );

        Ok(exercise)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

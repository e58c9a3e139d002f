//! Lift logging service.

use crate::domain::entities::{Lift, NewLift};
use crate::domain::repositories::{ExerciseRepository, LiftRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Service for a user's private lift log.
pub struct LiftService<L, E>
where
    L: LiftRepository + ?Sized,
    E: ExerciseRepository + ?Sized,
{
    lifts: Arc<L>,
    exercises: Arc<E>,
}

impl<L, E> LiftService<L, E>
where
    L: LiftRepository + ?Sized,
    E: ExerciseRepository + ?Sized,
{
    pub fn new(lifts: Arc<L>, exercises: Arc<E>) -> Self {
        Self { lifts, exercises }
    }

    /// Lists the lifts owned by `user_id`, most recent date first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Lift>, AppError> {
        self.lifts.list_for_user(user_id).await
    }

    /// Records a lift after checking that its exercise exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the exercise does not exist; nothing
    /// is written in that case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_lift: NewLift) -> Result<Lift, AppError> {
        if self
            .exercises
            .find_by_id(new_lift.exercise_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Exercise not found."));
        }

        let lift = self.lifts.create(new_lift).await?;

        tracing::info!(lift_id = lift.id, user_id = lift.user_id, "Lift recorded");

        Ok(lift)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.lifts.count().await
    }
}

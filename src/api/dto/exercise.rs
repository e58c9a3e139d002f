//! DTOs for exercise endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Exercise;

/// Request to add an exercise to the shared catalogue.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Exercise name must be between 1 and 255 characters."
    ))]
    pub name: String,
}

/// Exercise as listed. The creator is not exposed.
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub id: i64,
    pub name: String,
    pub date_created: DateTime<Utc>,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name,
            date_created: exercise.date_created,
        }
    }
}

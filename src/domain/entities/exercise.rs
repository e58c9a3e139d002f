//! Domain entity representing an exercise.

use chrono::{DateTime, Utc};

/// A named movement type.
///
/// Exercises are shared: every authenticated user sees all of them regardless
/// of who created them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub created_by: i64,
    pub date_created: DateTime<Utc>,
}

/// Input data for creating a new exercise.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub created_by: i64,
}

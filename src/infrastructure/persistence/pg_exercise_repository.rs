//! PostgreSQL implementation of exercise repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Exercise, NewExercise};
use crate::domain::repositories::ExerciseRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ExerciseRow {
    id: i64,
    name: String,
    created_by: i64,
    date_created: DateTime<Utc>,
}

impl From<ExerciseRow> for Exercise {
    fn from(row: ExerciseRow) -> Self {
        Exercise {
            id: row.id,
            name: row.name,
            created_by: row.created_by,
            date_created: row.date_created,
        }
    }
}

/// PostgreSQL repository for exercises.
pub struct PgExerciseRepository {
    pool: Arc<PgPool>,
}

impl PgExerciseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for PgExerciseRepository {
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError> {
        let row = sqlx::query_as::<_, ExerciseRow>(
            r#"
            INSERT INTO exercises (name, created_by)
            VALUES ($1, $2)
            RETURNING id, name, created_by, date_created
            "#,
        )
        .bind(new_exercise.name)
        .bind(new_exercise.created_by)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Exercise>, AppError> {
        let row = sqlx::query_as::<_, ExerciseRow>(
            r#"
            SELECT id, name, created_by, date_created
            FROM exercises
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Exercise>, AppError> {
        let rows = sqlx::query_as::<_, ExerciseRow>(
            r#"
            SELECT id, name, created_by, date_created
            FROM exercises
            ORDER BY date_created DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

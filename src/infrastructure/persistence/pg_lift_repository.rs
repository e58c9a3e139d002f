//! PostgreSQL implementation of lift repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Lift, NewLift};
use crate::domain::repositories::LiftRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LiftRow {
    id: i64,
    user_id: i64,
    exercise_id: i64,
    date: NaiveDate,
    repetitions: i32,
    weight: Decimal,
}

impl From<LiftRow> for Lift {
    fn from(row: LiftRow) -> Self {
        Lift {
            id: row.id,
            user_id: row.user_id,
            exercise_id: row.exercise_id,
            date: row.date,
            repetitions: row.repetitions,
            weight: row.weight,
        }
    }
}

/// PostgreSQL repository for lifts.
pub struct PgLiftRepository {
    pool: Arc<PgPool>,
}

impl PgLiftRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LiftRepository for PgLiftRepository {
    async fn create(&self, new_lift: NewLift) -> Result<Lift, AppError> {
        let row = sqlx::query_as::<_, LiftRow>(
            r#"
            INSERT INTO lifts (user_id, exercise_id, date, repetitions, weight)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, exercise_id, date, repetitions, weight
            "#,
        )
        .bind(new_lift.user_id)
        .bind(new_lift.exercise_id)
        .bind(new_lift.date)
        .bind(new_lift.repetitions)
        .bind(new_lift.weight)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Lift>, AppError> {
        let row = sqlx::query_as::<_, LiftRow>(
            r#"
            SELECT id, user_id, exercise_id, date, repetitions, weight
            FROM lifts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Lift>, AppError> {
        let rows = sqlx::query_as::<_, LiftRow>(
            r#"
            SELECT id, user_id, exercise_id, date, repetitions, weight
            FROM lifts
            WHERE user_id = $1
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lifts")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

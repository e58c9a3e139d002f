//! PostgreSQL category, exercise and lift repository tests.
//!
//! Run with a database: `DATABASE_URL=... cargo test -- --ignored`

use chrono::NaiveDate;
use lift_tracker::domain::entities::{NewCategory, NewExercise, NewLift, NewUser};
use lift_tracker::domain::repositories::{
    CategoryRepository, ExerciseRepository, LiftRepository, UserRepository,
};
use lift_tracker::error::AppError;
use lift_tracker::infrastructure::persistence::{
    PgCategoryRepository, PgExerciseRepository, PgLiftRepository, PgUserRepository,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

async fn create_user(pool: &Arc<PgPool>, username: &str) -> i64 {
    PgUserRepository::new(pool.clone())
        .create_with_permissions(
            NewUser {
                username: username.to_string(),
                password_hash: "$2b$04$hash".to_string(),
                first_name: String::new(),
                last_name: String::new(),
                is_staff: true,
            },
            vec![],
        )
        .await
        .unwrap()
        .id
}

fn lift(user_id: i64, exercise_id: i64, date: &str, weight: i64) -> NewLift {
    NewLift {
        user_id,
        exercise_id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        repetitions: 5,
        weight: Decimal::new(weight * 100, 2),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_categories_newest_first(pool: PgPool) {
    let repo = PgCategoryRepository::new(Arc::new(pool));

    for name in ["Legs", "Back"] {
        repo.create(NewCategory {
            name: name.to_string(),
        })
        .await
        .unwrap();
    }

    let names: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Back", "Legs"]);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_exercise_requires_existing_creator(pool: PgPool) {
    let repo = PgExerciseRepository::new(Arc::new(pool));

    let result = repo
        .create(NewExercise {
            name: "Squat".to_string(),
            created_by: 424242,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_lifts_scoped_and_ordered(pool: PgPool) {
    let pool = Arc::new(pool);
    let ann = create_user(&pool, "ann").await;
    let bob = create_user(&pool, "bob").await;

    let exercise = PgExerciseRepository::new(pool.clone())
        .create(NewExercise {
            name: "Squat".to_string(),
            created_by: ann,
        })
        .await
        .unwrap();

    let repo = PgLiftRepository::new(pool.clone());
    repo.create(lift(ann, exercise.id, "2024-05-01", 100))
        .await
        .unwrap();
    repo.create(lift(ann, exercise.id, "2024-05-03", 105))
        .await
        .unwrap();
    repo.create(lift(bob, exercise.id, "2024-05-02", 140))
        .await
        .unwrap();

    let ann_lifts = repo.list_for_user(ann).await.unwrap();
    assert_eq!(ann_lifts.len(), 2);
    assert!(ann_lifts.iter().all(|l| l.user_id == ann));
    assert_eq!(ann_lifts[0].date.to_string(), "2024-05-03");
    assert_eq!(ann_lifts[0].weight.to_string(), "105.00");

    assert_eq!(repo.list_for_user(bob).await.unwrap().len(), 1);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_lift_with_unknown_exercise_is_conflict(pool: PgPool) {
    let pool = Arc::new(pool);
    let ann = create_user(&pool, "ann").await;

    let result = PgLiftRepository::new(pool)
        .create(lift(ann, 424242, "2024-05-01", 100))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

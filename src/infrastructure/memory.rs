//! In-process implementation of every repository.
//!
//! [`MemoryStore`] keeps all tables behind one mutex, so each repository call is
//! a single critical section; user creation and its grants are therefore atomic
//! exactly like the PostgreSQL transaction. Integrity rules that the database
//! enforces (unique usernames, foreign keys) are enforced here too and reported
//! with the same error variants.
//!
//! Used by the HTTP-level tests and for running the service without a database.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::domain::entities::{
    Category, Exercise, Lift, NewCategory, NewExercise, NewLift, NewSession, NewUser, Session,
    User,
};
use crate::domain::repositories::{
    CategoryRepository, ExerciseRepository, LiftRepository, SessionRepository, UserRepository,
};
use crate::error::AppError;

/// Permission codenames known to the store; mirrors the seeded migration.
const KNOWN_PERMISSIONS: [&str; 12] = [
    "add_category",
    "change_category",
    "delete_category",
    "view_category",
    "add_exercise",
    "change_exercise",
    "delete_exercise",
    "view_exercise",
    "add_lift",
    "change_lift",
    "delete_lift",
    "view_lift",
];

#[derive(Default)]
struct Tables {
    next_id: i64,
    categories: Vec<Category>,
    exercises: Vec<Exercise>,
    lifts: Vec<Lift>,
    users: Vec<User>,
    user_permissions: BTreeSet<(i64, String)>,
    sessions: Vec<Session>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn user_exists(&self, id: i64) -> bool {
        self.users.iter().any(|u| u.id == id)
    }
}

/// Repository store backed by process memory.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory store");
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|_| AppError::internal("In-memory store lock poisoned"))
    }
}

fn foreign_key_violation(table: &str, column: &str) -> AppError {
    AppError::conflict(format!(
        "insert or update on table \"{table}\" violates foreign key constraint \"{table}_{column}_fkey\""
    ))
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let mut tables = self.tables()?;
        let category = Category {
            id: tables.next_id(),
            name: new_category.name,
            date_created: Utc::now(),
        };
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        let tables = self.tables()?;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Category>, AppError> {
        let tables = self.tables()?;
        let mut categories = tables.categories.clone();
        categories.sort_by(|a, b| {
            b.date_created
                .cmp(&a.date_created)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(categories)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables()?.categories.len() as i64)
    }
}

#[async_trait]
impl ExerciseRepository for MemoryStore {
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError> {
        let mut tables = self.tables()?;
        if !tables.user_exists(new_exercise.created_by) {
            return Err(foreign_key_violation("exercises", "created_by"));
        }

        let exercise = Exercise {
            id: tables.next_id(),
            name: new_exercise.name,
            created_by: new_exercise.created_by,
            date_created: Utc::now(),
        };
        tables.exercises.push(exercise.clone());
        Ok(exercise)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Exercise>, AppError> {
        let tables = self.tables()?;
        Ok(tables.exercises.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Exercise>, AppError> {
        let tables = self.tables()?;
        let mut exercises = tables.exercises.clone();
        exercises.sort_by(|a, b| {
            b.date_created
                .cmp(&a.date_created)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(exercises)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables()?.exercises.len() as i64)
    }
}

#[async_trait]
impl LiftRepository for MemoryStore {
    async fn create(&self, new_lift: NewLift) -> Result<Lift, AppError> {
        let mut tables = self.tables()?;
        if !tables.user_exists(new_lift.user_id) {
            return Err(foreign_key_violation("lifts", "user_id"));
        }
        if !tables.exercises.iter().any(|e| e.id == new_lift.exercise_id) {
            return Err(foreign_key_violation("lifts", "exercise_id"));
        }

        let lift = Lift {
            id: tables.next_id(),
            user_id: new_lift.user_id,
            exercise_id: new_lift.exercise_id,
            date: new_lift.date,
            repetitions: new_lift.repetitions,
            weight: new_lift.weight,
        };
        tables.lifts.push(lift.clone());
        Ok(lift)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Lift>, AppError> {
        let tables = self.tables()?;
        Ok(tables.lifts.iter().find(|l| l.id == id).cloned())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Lift>, AppError> {
        let tables = self.tables()?;
        let mut lifts: Vec<Lift> = tables
            .lifts
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect();
        lifts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Ok(lifts)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables()?.lifts.len() as i64)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        let tables = self.tables()?;
        Ok(tables.users.iter().any(|u| u.username == username))
    }

    async fn create_with_permissions(
        &self,
        new_user: NewUser,
        permissions: Vec<String>,
    ) -> Result<User, AppError> {
        let mut tables = self.tables()?;

        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::conflict(
                "duplicate key value violates unique constraint \"users_username_key\"",
            ));
        }

        if let Some(unknown) = permissions
            .iter()
            .find(|p| !KNOWN_PERMISSIONS.contains(&p.as_str()))
        {
            return Err(AppError::internal(format!("Unknown permission: {unknown}")));
        }

        let user = User {
            id: tables.next_id(),
            username: new_user.username,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            is_staff: new_user.is_staff,
            is_active: true,
            date_joined: Utc::now(),
            last_login: None,
        };
        tables.users.push(user.clone());
        for codename in permissions {
            tables.user_permissions.insert((user.id, codename));
        }

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let tables = self.tables()?;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables()?;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), AppError> {
        let mut tables = self.tables()?;
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("User not found."))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn touch_last_login(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.tables()?;
        if let Some(user) = tables.users.iter_mut().find(|u| u.id == id) {
            user.last_login = Some(Utc::now());
        }
        Ok(())
    }

    async fn permissions(&self, user_id: i64) -> Result<Vec<String>, AppError> {
        let tables = self.tables()?;
        Ok(tables
            .user_permissions
            .iter()
            .filter(|(id, _)| *id == user_id)
            .map(|(_, codename)| codename.clone())
            .collect())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let tables = self.tables()?;
        let mut users = tables.users.clone();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError> {
        let mut tables = self.tables()?;
        if !tables.user_exists(new_session.user_id) {
            return Err(foreign_key_violation("sessions", "user_id"));
        }
        if tables
            .sessions
            .iter()
            .any(|s| s.key_hash == new_session.key_hash)
        {
            return Err(AppError::conflict(
                "duplicate key value violates unique constraint \"sessions_pkey\"",
            ));
        }

        let session = Session {
            key_hash: new_session.key_hash,
            user_id: new_session.user_id,
            auth_hash: new_session.auth_hash,
            created_at: Utc::now(),
            expires_at: new_session.expires_at,
        };
        tables.sessions.push(session.clone());
        Ok(session)
    }

    async fn find(&self, key_hash: &str) -> Result<Option<Session>, AppError> {
        let tables = self.tables()?;
        Ok(tables
            .sessions
            .iter()
            .find(|s| s.key_hash == key_hash)
            .cloned())
    }

    async fn update_auth_hash(&self, key_hash: &str, auth_hash: &str) -> Result<(), AppError> {
        let mut tables = self.tables()?;
        if let Some(session) = tables.sessions.iter_mut().find(|s| s.key_hash == key_hash) {
            session.auth_hash = auth_hash.to_string();
        }
        Ok(())
    }

    async fn delete(&self, key_hash: &str) -> Result<(), AppError> {
        let mut tables = self.tables()?;
        tables.sessions.retain(|s| s.key_hash != key_hash);
        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64, AppError> {
        let mut tables = self.tables()?;
        let now = Utc::now();
        let before = tables.sessions.len();
        tables.sessions.retain(|s| !s.is_expired(now));
        Ok((before - tables.sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use rust_decimal::Decimal;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "hash".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_staff: true,
        }
    }

    #[tokio::test]
    async fn test_unknown_permission_creates_nothing() {
        let store = MemoryStore::new();

        let result = store
            .create_with_permissions(new_user("alice"), vec!["fly_plane".to_string()])
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
        assert!(!store.exists_by_username("alice").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let store = MemoryStore::new();
        store
            .create_with_permissions(new_user("alice"), vec![])
            .await
            .unwrap();

        let result = store.create_with_permissions(new_user("alice"), vec![]).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_lift_requires_existing_exercise() {
        let store = MemoryStore::new();
        let user = store
            .create_with_permissions(new_user("alice"), vec![])
            .await
            .unwrap();

        let result = LiftRepository::create(
            &store,
            NewLift {
                user_id: user.id,
                exercise_id: 999,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                repetitions: 5,
                weight: Decimal::new(1000, 1),
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
        assert_eq!(LiftRepository::count(&store).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_expired_sessions() {
        let store = MemoryStore::new();
        let user = store
            .create_with_permissions(new_user("alice"), vec![])
            .await
            .unwrap();

        for (key, offset) in [("old", -1), ("fresh", 1)] {
            SessionRepository::create(
                &store,
                NewSession {
                    key_hash: key.to_string(),
                    user_id: user.id,
                    auth_hash: "a".to_string(),
                    expires_at: Utc::now() + Duration::hours(offset),
                },
            )
            .await
            .unwrap();
        }

        assert_eq!(store.delete_expired().await.unwrap(), 1);
        assert!(store.find("old").await.unwrap().is_none());
        assert!(store.find("fresh").await.unwrap().is_some());
    }
}

//! One implementation of every repository, ready to hand to the services.

use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{
    CategoryRepository, ExerciseRepository, LiftRepository, SessionRepository, UserRepository,
};
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::persistence::{
    PgCategoryRepository, PgExerciseRepository, PgLiftRepository, PgSessionRepository,
    PgUserRepository,
};

/// Trait-object handles to the repositories the application runs against.
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn CategoryRepository>,
    pub exercises: Arc<dyn ExerciseRepository>,
    pub lifts: Arc<dyn LiftRepository>,
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
}

impl Repositories {
    /// PostgreSQL repositories sharing one connection pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            exercises: Arc::new(PgExerciseRepository::new(pool.clone())),
            lifts: Arc::new(PgLiftRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool.clone())),
            sessions: Arc::new(PgSessionRepository::new(pool)),
        }
    }

    /// Repositories backed by a single fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            categories: store.clone(),
            exercises: store.clone(),
            lifts: store.clone(),
            users: store.clone(),
            sessions: store,
        }
    }
}

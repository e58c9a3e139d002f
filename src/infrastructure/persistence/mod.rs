//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries are
//! checked at runtime and rows are decoded through `FromRow` structs.
//!
//! # Repositories
//!
//! - [`PgCategoryRepository`]
//! - [`PgExerciseRepository`]
//! - [`PgLiftRepository`]
//! - [`PgUserRepository`] - users and permission grants
//! - [`PgSessionRepository`]

pub mod pg_category_repository;
pub mod pg_exercise_repository;
pub mod pg_lift_repository;
pub mod pg_session_repository;
pub mod pg_user_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_exercise_repository::PgExerciseRepository;
pub use pg_lift_repository::PgLiftRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_user_repository::PgUserRepository;

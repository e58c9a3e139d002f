//! Repository trait definitions for the domain layer.
//!
//! Each entity gets its own repository trait. Ordering and filtering rules for
//! listings are part of each trait's contract and are written out explicitly by
//! every implementation.
//!
//! # Implementations
//!
//! - PostgreSQL: `crate::infrastructure::persistence`
//! - In-process: `crate::infrastructure::memory`
//! - Mocks are auto-generated via `mockall` for unit tests
//!
//! # Available Repositories
//!
//! - [`CategoryRepository`]
//! - [`ExerciseRepository`]
//! - [`LiftRepository`]
//! - [`UserRepository`]
//! - [`SessionRepository`]

pub mod category_repository;
pub mod exercise_repository;
pub mod lift_repository;
pub mod session_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use exercise_repository::ExerciseRepository;
pub use lift_repository::LiftRepository;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
#[cfg(test)]
pub use lift_repository::MockLiftRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

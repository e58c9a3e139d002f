//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::category_service::CategoryService`] - Category listing and creation
//! - [`services::exercise_service::ExerciseService`] - Shared exercise catalogue
//! - [`services::lift_service::LiftService`] - Per-user lift log
//! - [`services::user_service::UserService`] - Registration and profiles
//! - [`services::auth_service::AuthService`] - Credentials, sessions and password changes

pub mod services;

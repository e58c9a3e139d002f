//! Business logic services for the application layer.

pub mod auth_service;
pub mod category_service;
pub mod exercise_service;
pub mod lift_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthSettings};
pub use category_service::CategoryService;
pub use exercise_service::ExerciseService;
pub use lift_service::LiftService;
pub use user_service::{RegisterUser, UserService};

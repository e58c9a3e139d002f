//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod categories;
pub mod exercises;
pub mod health;
pub mod lifts;
pub mod users;

pub use categories::list_categories_handler;
pub use exercises::{create_exercise_handler, list_exercises_handler};
pub use health::health_handler;
pub use lifts::{create_lift_handler, list_lifts_handler};
pub use users::{
    change_password_handler, current_user_handler, login_handler, logout_handler,
    register_handler,
};

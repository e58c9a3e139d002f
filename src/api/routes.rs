//! API route configuration.
//!
//! Paths carry their trailing slash. Authentication is enforced per handler by
//! the [`crate::api::extract::AuthUser`] extractor.

use crate::api::handlers::{
    change_password_handler, create_exercise_handler, create_lift_handler, current_user_handler,
    list_categories_handler, list_exercises_handler, list_lifts_handler, login_handler,
    logout_handler, register_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /categories/`             - List categories (session required)
/// - `GET  /exercises/`              - List exercises (session required)
/// - `POST /exercises/`              - Create an exercise (session required)
/// - `GET  /lifts/`                  - List own lifts (session required)
/// - `POST /lifts/`                  - Log a lift (session required)
/// - `POST /users/`                  - Register
/// - `GET  /users/current/`          - Current user profile (session required)
/// - `POST /users/login/`            - Start a session
/// - `POST /users/logout/`           - End the session
/// - `POST /users/change-password/`  - Change password (session required)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/categories/", get(list_categories_handler))
        .route(
            "/exercises/",
            get(list_exercises_handler).post(create_exercise_handler),
        )
        .route("/lifts/", get(list_lifts_handler).post(create_lift_handler))
        .route("/users/", post(register_handler))
        .route("/users/current/", get(current_user_handler))
        .route("/users/login/", post(login_handler))
        .route("/users/logout/", post(logout_handler))
        .route("/users/change-password/", post(change_password_handler))
}

//! Shared application state handed to every handler.

use chrono::Duration;
use std::sync::Arc;

use crate::api::cookie::SessionCookie;
use crate::application::services::{
    AuthService, AuthSettings, CategoryService, ExerciseService, LiftService, UserService,
};
use crate::config::Config;
use crate::domain::repositories::{
    CategoryRepository, ExerciseRepository, LiftRepository, SessionRepository, UserRepository,
};
use crate::infrastructure::Repositories;
use crate::utils::password_validation::PasswordPolicy;

/// Services and request-independent settings.
///
/// Services run against trait objects so the same state works over
/// PostgreSQL and over the in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService<dyn CategoryRepository>>,
    pub exercise_service: Arc<ExerciseService<dyn ExerciseRepository>>,
    pub lift_service: Arc<LiftService<dyn LiftRepository, dyn ExerciseRepository>>,
    pub user_service: Arc<UserService<dyn UserRepository>>,
    pub auth_service: Arc<AuthService<dyn UserRepository, dyn SessionRepository>>,
    pub session_cookie: SessionCookie,
}

impl AppState {
    pub fn new(
        repositories: Repositories,
        auth_settings: AuthSettings,
        session_cookie: SessionCookie,
    ) -> Self {
        Self {
            category_service: Arc::new(CategoryService::new(repositories.categories)),
            exercise_service: Arc::new(ExerciseService::new(repositories.exercises.clone())),
            lift_service: Arc::new(LiftService::new(
                repositories.lifts,
                repositories.exercises,
            )),
            user_service: Arc::new(UserService::new(
                repositories.users.clone(),
                auth_settings.bcrypt_cost,
            )),
            auth_service: Arc::new(AuthService::new(
                repositories.users,
                repositories.sessions,
                auth_settings,
            )),
            session_cookie,
        }
    }

    /// Builds the state with the security settings from `config`.
    pub fn from_config(repositories: Repositories, config: &Config) -> Self {
        let auth_settings = AuthSettings {
            secret_key: config.secret_key.clone(),
            bcrypt_cost: config.bcrypt_cost,
            session_ttl: Duration::seconds(config.session_ttl_seconds),
            password_policy: PasswordPolicy::new(config.password_min_length),
        };

        let session_cookie = SessionCookie {
            name: config.session_cookie_name.clone(),
            secure: config.session_cookie_secure,
            max_age_seconds: config.session_ttl_seconds,
        };

        Self::new(repositories, auth_settings, session_cookie)
    }
}

#![allow(dead_code)]

use axum::http::{HeaderValue, StatusCode, header::SET_COOKIE};
use axum_test::{TestResponse, TestServer};
use chrono::Duration;
use lift_tracker::api::cookie::SessionCookie;
use lift_tracker::application::services::AuthSettings;
use lift_tracker::infrastructure::Repositories;
use lift_tracker::routes::app_router;
use lift_tracker::state::AppState;
use lift_tracker::utils::password_validation::PasswordPolicy;
use serde_json::json;

pub const COOKIE_NAME: &str = "sessionid";
pub const PASSWORD: &str = "Orig1nal-Barbell";

/// State over a fresh in-memory store with a cheap bcrypt cost.
pub fn create_test_state() -> AppState {
    let auth_settings = AuthSettings {
        secret_key: "test-secret-key-0123456789".to_string(),
        bcrypt_cost: 4,
        session_ttl: Duration::hours(1),
        password_policy: PasswordPolicy::default(),
    };

    let session_cookie = SessionCookie {
        name: COOKIE_NAME.to_string(),
        secure: false,
        max_age_seconds: 3600,
    };

    AppState::new(Repositories::in_memory(), auth_settings, session_cookie)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

/// Session key set by a response, if any.
pub fn session_key(response: &TestResponse) -> Option<String> {
    let prefix = format!("{COOKIE_NAME}=");

    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| value.strip_prefix(prefix.as_str()))
        .and_then(|rest| rest.split(';').next())
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

/// `Cookie` header value carrying `key`.
pub fn cookie(key: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{COOKIE_NAME}={key}")).unwrap()
}

pub async fn register(server: &TestServer, username: &str, password: &str) {
    server
        .post("/users/")
        .json(&json!({ "username": username, "password": password }))
        .await
        .assert_status(StatusCode::CREATED);
}

/// Logs in and returns the new session key.
pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/users/login/")
        .json(&json!({ "username": username, "password": password }))
        .await;

    response.assert_status_ok();
    session_key(&response).expect("login sets a session cookie")
}

pub async fn register_and_login(server: &TestServer, username: &str) -> String {
    register(server, username, PASSWORD).await;
    login(server, username, PASSWORD).await
}

mod common;

use axum::http::{StatusCode, header::COOKIE, header::SET_COOKIE};
use lift_tracker::domain::entities::DEFAULT_PERMISSIONS;
use serde_json::json;

// ─── REGISTER ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_register_success() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/users/")
        .json(&json!({
            "username": "ann",
            "password": "anything",
            "first_name": "Ann",
            "last_name": "Lee"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "detail": "Success." }));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());

    common::register(&server, "ann", common::PASSWORD).await;

    let response = server
        .post("/users/")
        .json(&json!({ "username": "ann", "password": "other-password" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "detail": "Username is already used." }));

    let users = state.user_service.list().await.unwrap();
    assert_eq!(users.iter().filter(|u| u.username == "ann").count(), 1);
}

#[tokio::test]
async fn test_register_grants_default_permissions_and_staff() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());

    common::register(&server, "ann", common::PASSWORD).await;

    let user = state
        .user_service
        .list()
        .await
        .unwrap()
        .into_iter()
        .find(|u| u.username == "ann")
        .unwrap();

    assert!(user.is_staff);
    assert!(user.is_active);

    let mut expected: Vec<String> = DEFAULT_PERMISSIONS.iter().map(|p| p.to_string()).collect();
    expected.sort();
    let granted = state.user_service.permissions(user.id).await.unwrap();
    assert_eq!(granted, expected);
}

#[tokio::test]
async fn test_register_does_not_check_password_strength() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/users/")
        .json(&json!({ "username": "ann", "password": "1" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_invalid_username() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/users/")
        .json(&json!({ "username": "bad name", "password": "pw" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert!(body["detail"].as_str().unwrap().starts_with("Enter a valid username."));
}

#[tokio::test]
async fn test_register_empty_password() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/users/")
        .json(&json!({ "username": "ann", "password": "" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "detail": "Password must not be empty." }));
}

#[tokio::test]
async fn test_register_missing_field() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/users/")
        .json(&json!({ "username": "ann" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert!(!body["detail"].as_str().unwrap().is_empty());
}

// ─── CURRENT USER ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_current_user_profile() {
    let server = common::make_server(common::create_test_state());

    server
        .post("/users/")
        .json(&json!({
            "username": "ann",
            "password": common::PASSWORD,
            "first_name": "Ann"
        }))
        .await
        .assert_status(StatusCode::CREATED);
    let key = common::login(&server, "ann", common::PASSWORD).await;

    let response = server
        .get("/users/current/")
        .add_header(COOKIE, common::cookie(&key))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["username"], "ann");
    assert_eq!(body["first_name"], "Ann");
    assert_eq!(body["last_name"], "");
    assert_eq!(body["is_staff"], true);
    assert!(body["id"].is_i64());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_unauthenticated_reads_are_rejected() {
    let server = common::make_server(common::create_test_state());

    for path in ["/categories/", "/exercises/", "/lifts/", "/users/current/"] {
        let response = server.get(path).await;

        response.assert_status_unauthorized();
        response.assert_json(&json!({ "detail": "Unauthorized" }));
    }
}

#[tokio::test]
async fn test_unknown_session_key_is_anonymous() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .get("/users/current/")
        .add_header(COOKIE, common::cookie("not-a-real-session"))
        .await;

    response.assert_status_unauthorized();
}

// ─── LOGIN / LOGOUT ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let server = common::make_server(common::create_test_state());
    common::register(&server, "ann", common::PASSWORD).await;

    let response = server
        .post("/users/login/")
        .json(&json!({ "username": "ann", "password": common::PASSWORD }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "detail": "Success." }));

    let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_login_updates_last_login() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());
    common::register(&server, "ann", common::PASSWORD).await;

    common::login(&server, "ann", common::PASSWORD).await;

    let user = state.user_service.list().await.unwrap().remove(0);
    assert!(user.last_login.is_some());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = common::make_server(common::create_test_state());
    common::register(&server, "ann", common::PASSWORD).await;

    let response = server
        .post("/users/login/")
        .json(&json!({ "username": "ann", "password": "wrong-password" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "detail": "Invalid credentials." }));
    assert!(common::session_key(&response).is_none());

    server.get("/users/current/").await.assert_status_unauthorized();
}

#[tokio::test]
async fn test_login_unknown_user() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/users/login/")
        .json(&json!({ "username": "nobody", "password": "whatever" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "detail": "Invalid credentials." }));
}

#[tokio::test]
async fn test_login_checks_every_byte_of_long_password() {
    let server = common::make_server(common::create_test_state());
    let prefix = "A".repeat(72);
    let password = format!("{prefix}real-tail");
    common::register(&server, "ann", &password).await;

    let response = server
        .post("/users/login/")
        .json(&json!({ "username": "ann", "password": format!("{prefix}totally-different") }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "detail": "Invalid credentials." }));
    assert!(common::session_key(&response).is_none());

    common::login(&server, "ann", &password).await;
}

#[tokio::test]
async fn test_login_rotates_presented_session() {
    let server = common::make_server(common::create_test_state());
    let old_key = common::register_and_login(&server, "ann").await;

    let response = server
        .post("/users/login/")
        .add_header(COOKIE, common::cookie(&old_key))
        .json(&json!({ "username": "ann", "password": common::PASSWORD }))
        .await;
    response.assert_status_ok();
    let new_key = common::session_key(&response).unwrap();

    assert_ne!(old_key, new_key);

    server
        .get("/users/current/")
        .add_header(COOKIE, common::cookie(&old_key))
        .await
        .assert_status_unauthorized();
    server
        .get("/users/current/")
        .add_header(COOKIE, common::cookie(&new_key))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_logout_ends_session_and_clears_cookie() {
    let server = common::make_server(common::create_test_state());
    let key = common::register_and_login(&server, "ann").await;

    let response = server
        .post("/users/logout/")
        .add_header(COOKIE, common::cookie(&key))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "detail": "Success." }));

    let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("sessionid=;"));
    assert!(set_cookie.contains("Max-Age=0"));

    server
        .get("/users/current/")
        .add_header(COOKIE, common::cookie(&key))
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn test_logout_without_session() {
    let server = common::make_server(common::create_test_state());

    let response = server.post("/users/logout/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "detail": "Success." }));
}

// ─── CHANGE PASSWORD ─────────────────────────────────────────────────────────

const NEW_PASSWORD: &str = "Tr1cky-Deadlift-99";

#[tokio::test]
async fn test_change_password_keeps_current_session() {
    let server = common::make_server(common::create_test_state());
    let key = common::register_and_login(&server, "ann").await;

    let response = server
        .post("/users/change-password/")
        .add_header(COOKIE, common::cookie(&key))
        .json(&json!({
            "current_password": common::PASSWORD,
            "new_password": NEW_PASSWORD
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "detail": "Password changed successfully." }));

    server
        .get("/users/current/")
        .add_header(COOKIE, common::cookie(&key))
        .await
        .assert_status_ok();

    common::login(&server, "ann", NEW_PASSWORD).await;

    server
        .post("/users/login/")
        .json(&json!({ "username": "ann", "password": common::PASSWORD }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_change_password_invalidates_other_sessions() {
    let server = common::make_server(common::create_test_state());
    let first = common::register_and_login(&server, "ann").await;
    let second = common::login(&server, "ann", common::PASSWORD).await;

    server
        .post("/users/change-password/")
        .add_header(COOKIE, common::cookie(&first))
        .json(&json!({
            "current_password": common::PASSWORD,
            "new_password": NEW_PASSWORD
        }))
        .await
        .assert_status_ok();

    server
        .get("/users/current/")
        .add_header(COOKIE, common::cookie(&second))
        .await
        .assert_status_unauthorized();
    server
        .get("/users/current/")
        .add_header(COOKIE, common::cookie(&first))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_change_password_wrong_current() {
    let server = common::make_server(common::create_test_state());
    let key = common::register_and_login(&server, "ann").await;

    let response = server
        .post("/users/change-password/")
        .add_header(COOKIE, common::cookie(&key))
        .json(&json!({
            "current_password": "not-my-password",
            "new_password": NEW_PASSWORD
        }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "detail": "Current password is incorrect." }));

    common::login(&server, "ann", common::PASSWORD).await;
}

#[tokio::test]
async fn test_change_password_rejects_weak_password() {
    let server = common::make_server(common::create_test_state());
    let key = common::register_and_login(&server, "ann").await;

    let response = server
        .post("/users/change-password/")
        .add_header(COOKIE, common::cookie(&key))
        .json(&json!({
            "current_password": common::PASSWORD,
            "new_password": "12345678"
        }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "detail": "This password is too common. This password is entirely numeric."
    }));

    common::login(&server, "ann", common::PASSWORD).await;
}

#[tokio::test]
async fn test_change_password_requires_session() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/users/change-password/")
        .json(&json!({
            "current_password": "a",
            "new_password": NEW_PASSWORD
        }))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_change_password_allows_password_like_username() {
    let server = common::make_server(common::create_test_state());
    let key = common::register_and_login(&server, "deadliftking").await;

    server
        .post("/users/change-password/")
        .add_header(COOKIE, common::cookie(&key))
        .json(&json!({
            "current_password": common::PASSWORD,
            "new_password": "Deadliftking-2024!"
        }))
        .await
        .assert_status_ok();

    common::login(&server, "deadliftking", "Deadliftking-2024!").await;
}

mod common;

use axum::http::{StatusCode, header::COOKIE};
use serde_json::json;

#[tokio::test]
async fn test_create_exercise_success() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());
    let key = common::register_and_login(&server, "ann").await;

    let response = server
        .post("/exercises/")
        .add_header(COOKIE, common::cookie(&key))
        .json(&json!({ "name": "Front squat" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "detail": "Exercise created successfully." }));

    let exercises = state.exercise_service.list().await.unwrap();
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].name, "Front squat");
}

#[tokio::test]
async fn test_create_exercise_records_creator() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());
    let key = common::register_and_login(&server, "ann").await;

    server
        .post("/exercises/")
        .add_header(COOKIE, common::cookie(&key))
        .json(&json!({ "name": "Deadlift" }))
        .await
        .assert_status(StatusCode::CREATED);

    let ann = state.user_service.list().await.unwrap().remove(0);
    let exercise = state.exercise_service.list().await.unwrap().remove(0);
    assert_eq!(exercise.created_by, ann.id);
}

#[tokio::test]
async fn test_create_exercise_empty_name() {
    let server = common::make_server(common::create_test_state());
    let key = common::register_and_login(&server, "ann").await;

    let response = server
        .post("/exercises/")
        .add_header(COOKIE, common::cookie(&key))
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "detail": "Exercise name must be between 1 and 255 characters."
    }));
}

#[tokio::test]
async fn test_create_exercise_malformed_json() {
    let server = common::make_server(common::create_test_state());
    let key = common::register_and_login(&server, "ann").await;

    let response = server
        .post("/exercises/")
        .add_header(COOKIE, common::cookie(&key))
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_exercise_requires_session() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/exercises/")
        .json(&json!({ "name": "Squat" }))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_duplicate_exercise_names_allowed() {
    let server = common::make_server(common::create_test_state());
    let key = common::register_and_login(&server, "ann").await;

    for _ in 0..2 {
        server
            .post("/exercises/")
            .add_header(COOKIE, common::cookie(&key))
            .json(&json!({ "name": "Squat" }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let items = server
        .get("/exercises/")
        .add_header(COOKIE, common::cookie(&key))
        .await
        .json::<Vec<serde_json::Value>>();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_exercises_shared_between_users_newest_first() {
    let server = common::make_server(common::create_test_state());
    let ann = common::register_and_login(&server, "ann").await;
    let bob = common::register_and_login(&server, "bob").await;

    for (key, name) in [(&ann, "Squat"), (&bob, "Bench press")] {
        server
            .post("/exercises/")
            .add_header(COOKIE, common::cookie(key))
            .json(&json!({ "name": name }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server
        .get("/exercises/")
        .add_header(COOKIE, common::cookie(&ann))
        .await;

    response.assert_status_ok();
    let items = response.json::<Vec<serde_json::Value>>();
    let names: Vec<&str> = items.iter().map(|e| e["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Bench press", "Squat"]);

    let first = items[0].as_object().unwrap();
    let mut keys: Vec<&str> = first.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["date_created", "id", "name"]);
}

mod common;

#[tokio::test]
async fn test_health_check() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/health/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_check_is_public() {
    let server = common::make_server(common::create_test_state());

    server
        .get("/health/")
        .add_header(
            axum::http::header::COOKIE,
            common::cookie("stale-session-key"),
        )
        .await
        .assert_status_ok();
}

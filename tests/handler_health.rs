mod common;

use serde_json::json;

#[tokio::test]
async fn test_root_endpoint() {
    let server = common::create_test_server(&common::test_config());

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "running");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = common::create_test_server(&common::test_config());

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_health_trailing_slash_is_normalized() {
    let server = common::create_test_server(&common::test_config());

    let response = server.get("/health/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "status": "healthy" }));
    common::assert_security_headers(&response);
}

#[tokio::test]
async fn test_analyze_trailing_slash_is_normalized() {
    let server = common::create_test_server(&common::test_config());

    let response = server
        .post("/analyze/")
        .json(&common::valid_analyze_body())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["presentationId"], "abc123");
}

#[tokio::test]
async fn test_unknown_route_still_not_found() {
    let server = common::create_test_server(&common::test_config());

    let response = server.get("/nope/").expect_failure().await;

    response.assert_status_not_found();
}

mod common;

use axum::http::{Method, StatusCode};

#[tokio::test]
async fn test_security_headers_on_success() {
    let server = common::create_test_server(&common::test_config());

    let response = server.get("/health").await;

    response.assert_status_ok();
    common::assert_security_headers(&response);
}

#[tokio::test]
async fn test_security_headers_on_errors() {
    let config = clientview_api::config::Config {
        rate_limit_max_requests: 2,
        ..common::test_config()
    };
    let server = common::create_test_server(&config);

    let not_found = server.get("/missing").expect_failure().await;
    not_found.assert_status_not_found();
    common::assert_security_headers(&not_found);

    let invalid = server
        .post("/analyze")
        .json(&serde_json::json!({ "fileUrl": "bad", "presentationId": "abc" }))
        .expect_failure()
        .await;
    invalid.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    common::assert_security_headers(&invalid);

    let not_implemented = server
        .post("/generate")
        .json(&common::valid_generate_body())
        .expect_failure()
        .await;
    not_implemented.assert_status(StatusCode::NOT_IMPLEMENTED);
    common::assert_security_headers(&not_implemented);

    let limited = server
        .post("/generate")
        .json(&common::valid_generate_body())
        .expect_failure()
        .await;
    limited.assert_status(StatusCode::TOO_MANY_REQUESTS);
    common::assert_security_headers(&limited);
}

#[tokio::test]
async fn test_cors_preflight_for_allowed_origin() {
    let server = common::create_test_server(&common::test_config());

    let response = server
        .method(Method::OPTIONS, "/analyze")
        .add_header("Origin", "http://localhost:3000")
        .add_header("Access-Control-Request-Method", "POST")
        .add_header("Access-Control-Request-Headers", "content-type")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://localhost:3000"
    );
    assert_eq!(response.header("access-control-allow-credentials"), "true");
    assert_eq!(response.header("access-control-max-age"), "3600");
    common::assert_security_headers(&response);
}

#[tokio::test]
async fn test_cors_preflight_does_not_consume_budget() {
    let config = clientview_api::config::Config {
        rate_limit_max_requests: 1,
        ..common::test_config()
    };
    let server = common::create_test_server(&config);

    for _ in 0..5 {
        server
            .method(Method::OPTIONS, "/analyze")
            .add_header("Origin", "http://localhost:3000")
            .add_header("Access-Control-Request-Method", "POST")
            .await
            .assert_status_ok();
    }

    server
        .post("/analyze")
        .json(&common::valid_analyze_body())
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_cors_unknown_origin_not_echoed() {
    let server = common::create_test_server(&common::test_config());

    let response = server
        .get("/health")
        .add_header("Origin", "https://evil.example")
        .await;

    response.assert_status_ok();
    assert!(response.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_trusted_host_allows_listed_hosts_in_production() {
    let server = common::create_test_server(&common::production_config());

    server
        .get("/health")
        .add_header("Host", "clientview.vercel.app")
        .await
        .assert_status_ok();

    server
        .get("/health")
        .add_header("Host", "localhost:8000")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_trusted_host_rejects_unknown_host_in_production() {
    let server = common::create_test_server(&common::production_config());

    let response = server
        .get("/health")
        .add_header("Host", "attacker.example")
        .expect_failure()
        .await;

    response.assert_status_bad_request();
    common::assert_security_headers(&response);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "bad_request");
    assert_eq!(json["error"]["message"], "Invalid host header");
}

#[tokio::test]
async fn test_wildcard_host_does_not_match_apex() {
    let server = common::create_test_server(&common::production_config());

    server
        .get("/health")
        .add_header("Host", "vercel.app")
        .expect_failure()
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_host_not_checked_in_development() {
    let server = common::create_test_server(&common::test_config());

    server
        .get("/health")
        .add_header("Host", "attacker.example")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_openapi_served_in_development() {
    let server = common::create_test_server(&common::test_config());

    let response = server.get("/openapi.json").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert!(json["paths"]["/analyze"].is_object());
    assert!(json["paths"]["/generate"].is_object());
}

#[tokio::test]
async fn test_openapi_hidden_in_production() {
    let server = common::create_test_server(&common::production_config());

    server
        .get("/openapi.json")
        .add_header("Host", "localhost")
        .expect_failure()
        .await
        .assert_status_not_found();
}

#![allow(dead_code)]

use axum_test::TestServer;
use clientview_api::config::{Config, Environment};
use clientview_api::routes::app;
use clientview_api::state::AppState;
use serde_json::{Value, json};

pub const SECURITY_HEADERS: [(&str, &str); 4] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
];

pub fn test_config() -> Config {
    Config::default()
}

pub fn production_config() -> Config {
    Config {
        environment: Environment::Production,
        allowed_hosts: vec!["*.vercel.app".to_string(), "localhost".to_string()],
        ..Config::default()
    }
}

pub fn create_test_server(config: &Config) -> TestServer {
    let state = AppState::new(config.rate_limit_policy(), config.behind_proxy);
    TestServer::new(app(state, config)).unwrap()
}

pub fn valid_analyze_body() -> Value {
    json!({
        "fileUrl": "https://x/y.pptx",
        "presentationId": "abc123"
    })
}

pub fn valid_generate_body() -> Value {
    json!({
        "templateId": "quarterly_review",
        "slides": [
            { "index": 0, "category": "Performance" },
            { "index": 1, "category": "Fees" }
        ]
    })
}

pub fn assert_security_headers(response: &axum_test::TestResponse) {
    for (name, expected) in SECURITY_HEADERS {
        let value = response
            .headers()
            .get(name)
            .unwrap_or_else(|| panic!("missing header {name}"));
        assert_eq!(value, expected, "header {name}");
    }
}

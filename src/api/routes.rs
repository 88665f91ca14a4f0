//! API route configuration.

use crate::api::handlers::{
    analyze_handler, generate_handler, health_handler, metrics_handler, openapi_handler,
    root_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Liveness routes, never rate limited.
///
/// # Endpoints
///
/// - `GET /`        - Service banner
/// - `GET /health`  - Health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}

/// Business routes, subject to rate limiting.
///
/// # Endpoints
///
/// - `POST /analyze`   - Accept a presentation for analysis
/// - `POST /generate`  - Generate a presentation (not implemented, 501)
pub fn presentation_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/generate", post(generate_handler))
}

/// API documentation routes, mounted in development only.
///
/// # Endpoints
///
/// - `GET /openapi.json` - OpenAPI 3 document
pub fn docs_routes() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_handler))
}

/// Prometheus scrape endpoint, mounted when a recorder is installed.
///
/// # Endpoints
///
/// - `GET /metrics` - Text exposition format
pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}

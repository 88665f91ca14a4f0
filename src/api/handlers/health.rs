//! Handlers for liveness endpoints.
//!
//! Both endpoints are constant and never rate limited.

use axum::Json;

use crate::api::dto::health::{HealthResponse, RootResponse};

/// Reports that the service is running.
///
/// # Endpoint
///
/// `GET /`
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service is running", body = RootResponse))
)]
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "ClientView Backend API".to_string(),
        status: "running".to_string(),
    })
}

/// Health check for load balancers and orchestrators.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "healthy" }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

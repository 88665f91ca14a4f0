//! DTOs for the liveness endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Response of `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "ClientView Backend API")]
    pub message: String,
    #[schema(example = "running")]
    pub status: String,
}

/// Response of `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

//! Handler serving the OpenAPI document.

use axum::Json;
use utoipa::OpenApi;

use crate::api::openapi::ApiDoc;

/// Returns the OpenAPI 3 description of the API.
///
/// # Endpoint
///
/// `GET /openapi.json` (development only)
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

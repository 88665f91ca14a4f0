//! Handler for presentation generation endpoint.

use axum::{extract::State, http::StatusCode};

use crate::api::dto::generate::GenerateRequest;
use crate::api::extract::ValidatedJson;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Generates a presentation from a template.
///
/// # Endpoint
///
/// `POST /generate`
///
/// Valid requests are answered with **501 Not Implemented**.
///
/// # Errors
///
/// - **422**: body is malformed or fails validation
/// - **429**: client exceeded the rate limit
/// - **501**: generation is not available
#[utoipa::path(
    post,
    path = "/generate",
    tag = "presentations",
    request_body = GenerateRequest,
    responses(
        (status = 422, description = "Validation failed", body = ErrorBody),
        (status = 429, description = "Rate limit exceeded", body = ErrorBody),
        (status = 501, description = "Generation not implemented", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn generate_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<GenerateRequest>,
) -> Result<StatusCode, AppError> {
    let generated = state
        .presentation_service
        .generate(&payload.template_id, &payload.slides)?;

    match generated {}
}

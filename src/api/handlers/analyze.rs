//! Handler for presentation analysis endpoint.

use axum::{Json, extract::State};

use crate::api::dto::analyze::{AnalyzeRequest, AnalyzeResponse};
use crate::api::extract::ValidatedJson;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Accepts a presentation for analysis.
///
/// # Endpoint
///
/// `POST /analyze`
///
/// # Request Body
///
/// ```json
/// {
///   "fileUrl": "https://storage.example.com/decks/q3.pptx",
///   "presentationId": "abc123"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "presentationId": "abc123",
///   "status": "processing",
///   "message": "Analysis started"
/// }
/// ```
///
/// # Errors
///
/// - **422**: body is malformed or fails validation
/// - **429**: client exceeded the rate limit
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "presentations",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis accepted", body = AnalyzeResponse),
        (status = 422, description = "Validation failed", body = ErrorBody),
        (status = 429, description = "Rate limit exceeded", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn analyze_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let accepted = state
        .presentation_service
        .start_analysis(&payload.file_url, &payload.presentation_id);

    Ok(Json(accepted.into()))
}

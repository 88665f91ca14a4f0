//! DTOs for the presentation analysis endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validators::{IDENTIFIER_REGEX, validate_http_url};
use crate::domain::entities::{AnalysisAccepted, AnalysisStatus};

/// Request to analyze an uploaded presentation.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Location of the `.pptx` file (must be HTTP/HTTPS, at most 2048 characters).
    #[validate(length(max = 2048, message = "fileUrl must be at most 2048 characters"))]
    #[validate(custom(function = validate_http_url))]
    #[schema(example = "https://storage.example.com/decks/q3-review.pptx")]
    pub file_url: String,

    /// Caller-chosen presentation identifier.
    #[validate(length(max = 100, message = "presentationId must be at most 100 characters"))]
    #[validate(regex(
        path = *IDENTIFIER_REGEX,
        message = "presentationId may only contain letters, digits, '_' and '-'"
    ))]
    #[schema(example = "abc123")]
    pub presentation_id: String,
}

/// Acknowledgment returned once an analysis request is accepted.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub presentation_id: String,
    pub status: AnalysisStatus,
    #[schema(example = "Analysis started")]
    pub message: String,
}

impl From<AnalysisAccepted> for AnalyzeResponse {
    fn from(accepted: AnalysisAccepted) -> Self {
        Self {
            presentation_id: accepted.presentation_id,
            status: accepted.status,
            message: "Analysis started".to_string(),
        }
    }
}

//! DTOs for the presentation generation endpoint.

use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use super::validators::IDENTIFIER_REGEX;

/// Request to build a presentation from a template and edited slides.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[validate(length(max = 100, message = "templateId must be at most 100 characters"))]
    #[validate(regex(
        path = *IDENTIFIER_REGEX,
        message = "templateId may only contain letters, digits, '_' and '-'"
    ))]
    #[schema(example = "quarterly_review")]
    pub template_id: String,

    /// Slide records in presentation order. Their content is not inspected here.
    #[validate(length(max = 100, message = "slides must contain at most 100 entries"))]
    #[schema(value_type = Vec<Object>)]
    pub slides: Vec<Map<String, Value>>,
}

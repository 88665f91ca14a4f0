//! Presentation analysis and generation service.

use std::convert::Infallible;

use serde_json::{Map, Value};

use crate::domain::entities::AnalysisAccepted;
use crate::error::AppError;
use crate::metrics::names;

/// Message returned when presentation generation is requested.
pub const GENERATION_NOT_IMPLEMENTED: &str = "PowerPoint generation not yet implemented";

/// Business operations on uploaded presentations.
///
/// Neither operation decodes PowerPoint content: analysis is acknowledged
/// without queuing any work, and generation is reported as unavailable.
#[derive(Debug, Default)]
pub struct PresentationService;

impl PresentationService {
    /// Creates a new presentation service.
    pub fn new() -> Self {
        Self
    }

    /// Accepts an analysis request for the presentation stored at `file_url`.
    ///
    /// Inputs are expected to be validated by the caller. The returned
    /// acknowledgment is always in the `processing` state.
    pub fn start_analysis(&self, file_url: &str, presentation_id: &str) -> AnalysisAccepted {
        tracing::info!(presentation_id, file_url, "Analysis requested");
        metrics::counter!(names::ANALYSIS_REQUESTS_TOTAL).increment(1);

        AnalysisAccepted::processing(presentation_id)
    }

    /// Builds a presentation from `template_id` with the edited `slides`.
    ///
    /// # Errors
    ///
    /// Always returns [`AppError::NotImplemented`].
    pub fn generate(
        &self,
        template_id: &str,
        slides: &[Map<String, Value>],
    ) -> Result<Infallible, AppError> {
        tracing::info!(
            template_id,
            slide_count = slides.len(),
            "Generation requested"
        );
        metrics::counter!(names::GENERATION_REQUESTS_TOTAL).increment(1);

        Err(AppError::not_implemented(GENERATION_NOT_IMPLEMENTED))
    }
}

//! Presentation analysis entities.

use serde::Serialize;
use utoipa::ToSchema;

/// Lifecycle status reported for a presentation analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Processing,
}

/// Acknowledgment that an analysis request was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisAccepted {
    pub presentation_id: String,
    pub status: AnalysisStatus,
}

impl AnalysisAccepted {
    /// Creates an acknowledgment in the `processing` state.
    pub fn processing(presentation_id: impl Into<String>) -> Self {
        Self {
            presentation_id: presentation_id.into(),
            status: AnalysisStatus::Processing,
        }
    }
}

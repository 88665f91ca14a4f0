//! Prometheus metrics for the API server.
//!
//! The recorder is installed once at startup when `METRICS_ENABLED` is set.
//! Without it, the counters emitted by the services are no-ops.

use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Metric names as constants for consistency.
pub mod names {
    pub const RATE_LIMIT_REJECTIONS_TOTAL: &str = "clientview_rate_limit_rejections_total";
    pub const ANALYSIS_REQUESTS_TOTAL: &str = "clientview_analysis_requests_total";
    pub const GENERATION_REQUESTS_TOTAL: &str = "clientview_generation_requests_total";
}

/// Installs the global Prometheus recorder.
///
/// Returns a handle that renders the current metrics in the text exposition
/// format.
///
/// # Errors
///
/// Fails if a global recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_metrics();
    Ok(handle)
}

fn describe_metrics() {
    ::metrics::describe_counter!(
        names::RATE_LIMIT_REJECTIONS_TOTAL,
        "Requests rejected by the per-client rate limiter"
    );
    ::metrics::describe_counter!(
        names::ANALYSIS_REQUESTS_TOTAL,
        "Presentation analysis requests accepted"
    );
    ::metrics::describe_counter!(
        names::GENERATION_REQUESTS_TOTAL,
        "Presentation generation requests received"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::PresentationService;

    #[test]
    fn test_service_counters_are_rendered() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            let service = PresentationService::new();
            service.start_analysis("https://x/y.pptx", "abc123");
            service.start_analysis("https://x/z.pptx", "abc124");
            let _ = service.generate("tpl", &[]);
        });

        let rendered = handle.render();
        assert!(rendered.contains(&format!("{} 2", names::ANALYSIS_REQUESTS_TOTAL)));
        assert!(rendered.contains(&format!("{} 1", names::GENERATION_REQUESTS_TOTAL)));
    }
}

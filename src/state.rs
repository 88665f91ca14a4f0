//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::application::services::{PresentationService, RateLimitService};
use crate::domain::entities::RateLimitPolicy;
use crate::infrastructure::rate_limit::InMemoryRateLimitRepository;

/// Rate limiter backed by process-local storage.
pub type InMemoryRateLimitService = RateLimitService<InMemoryRateLimitRepository>;

/// Handles shared by every request.
///
/// Cloning is cheap: all members are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub rate_limit_service: Arc<InMemoryRateLimitService>,
    pub presentation_service: Arc<PresentationService>,
    /// Key the rate limiter on forwarded client addresses instead of the peer.
    pub behind_proxy: bool,
    /// Renders `GET /metrics`; the route is mounted only when present.
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Creates application state with fresh in-memory rate limiter storage.
    pub fn new(policy: RateLimitPolicy, behind_proxy: bool) -> Self {
        let repository = Arc::new(InMemoryRateLimitRepository::new());

        Self {
            rate_limit_service: Arc::new(RateLimitService::new(repository, policy)),
            presentation_service: Arc::new(PresentationService::new()),
            behind_proxy,
            metrics_handle: None,
        }
    }

    /// Attaches the handle of an installed Prometheus recorder.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }
}

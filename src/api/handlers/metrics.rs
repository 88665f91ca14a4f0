//! Handler for the Prometheus scrape endpoint.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

const CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Renders all recorded metrics.
///
/// # Endpoint
///
/// `GET /metrics` (only mounted when `METRICS_ENABLED` is set; never rate limited)
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match &state.metrics_handle {
        Some(handle) => ([(header::CONTENT_TYPE, CONTENT_TYPE)], handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

//! Cross-origin resource sharing policy.

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Preflight cache lifetime.
const MAX_AGE: Duration = Duration::from_secs(3600);

/// Creates the CORS layer for the configured origins.
///
/// Credentials are allowed, so origins must be explicit; invalid origins are
/// skipped (configuration validation rejects them earlier). Preflight requests
/// are answered here and never reach the rate limiter.
pub fn layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(MAX_AGE)
}

//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Service banner (public)
//! - `GET  /health`        - Health check (public)
//! - `POST /analyze`       - Presentation analysis (rate limited)
//! - `POST /generate`      - Presentation generation (rate limited)
//! - `GET  /openapi.json`  - API document (development only)
//! - `GET  /metrics`       - Prometheus metrics (when enabled)
//!
//! # Middleware
//!
//! From the inside out:
//!
//! - **Rate limiting** - Per-client sliding window on business routes only
//! - **Panic catching** - Handler panics become JSON 500 responses
//! - **CORS** - Configured origins; preflights are answered here
//! - **Trusted host** - Host allow-list (production only)
//! - **Security headers** - Fixed defensive headers on every response
//! - **Tracing** - Structured request/response logging
//!
//! [`app`] additionally trims trailing slashes before routing.

use std::sync::Arc;

use crate::api::middleware::{cors, panic, rate_limit, security_headers, trusted_host, tracing};
use crate::api::routes::{docs_routes, metrics_routes, presentation_routes, public_routes};
use crate::config::Config;
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds the service that is actually served: [`app_router`] behind
/// trailing-slash normalization.
///
/// Normalization has to run before routing, so the router is mounted as the
/// fallback service of an otherwise empty router. `/health/` then reaches the
/// `/health` handler.
pub fn app(state: AppState, config: &Config) -> Router {
    let router = app_router(state, config);

    Router::new().fallback_service(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - validated configuration; only CORS origins, allowed hosts and
///   the environment are read here
pub fn app_router(state: AppState, config: &Config) -> Router {
    let limited = presentation_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        rate_limit::layer,
    ));

    let mut routes = Router::new().merge(public_routes()).merge(limited);

    if !config.is_production() {
        routes = routes.merge(docs_routes());
    }

    if state.metrics_handle.is_some() {
        routes = routes.merge(metrics_routes());
    }

    let mut router = routes
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic::handle_panic))
        .layer(cors::layer(&config.allowed_origins));

    if config.is_production() {
        let allowed_hosts: Arc<[String]> = Arc::from(config.allowed_hosts.clone());
        router = router.layer(middleware::from_fn_with_state(
            allowed_hosts,
            trusted_host::layer,
        ));
    }

    router
        .layer(middleware::from_fn(security_headers::layer))
        .layer(tracing::layer())
}

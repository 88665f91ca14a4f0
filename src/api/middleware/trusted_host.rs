//! Host header validation for production deployments.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::error::AppError;
use crate::utils::host::{host_is_allowed, request_host};

/// Rejects requests whose `Host` does not match the allow-list.
///
/// # Errors
///
/// Returns `400 Bad Request` if the host is missing, not valid UTF-8, or not
/// matched by any pattern in `allowed_hosts`.
///
/// # Example
///
/// ```rust,ignore
/// let allowed: Arc<[String]> = Arc::from(config.allowed_hosts.clone());
/// let app = router.layer(middleware::from_fn_with_state(allowed, trusted_host::layer));
/// ```
pub async fn layer(
    State(allowed_hosts): State<Arc<[String]>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    match request_host(req.headers(), req.uri()) {
        Some(host) if host_is_allowed(&host, &allowed_hosts) => Ok(next.run(req).await),
        host => {
            tracing::warn!(host = host.as_deref().unwrap_or("<missing>"), "Rejected untrusted host");
            Err(AppError::bad_request("Invalid host header", json!({})))
        }
    }
}

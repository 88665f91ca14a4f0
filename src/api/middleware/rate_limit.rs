//! Rate limiting middleware using a per-client sliding window.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState, utils::client_ip::client_identifier};

/// Rejects requests from clients that exceeded the configured limit.
///
/// # Limits
///
/// Defaults to 100 requests per client within any 60 second window
/// (see [`crate::config::Config::rate_limit_policy`]).
///
/// Requests exceeding the limit receive `429 Too Many Requests` with a static
/// JSON body and no `Retry-After` hint.
///
/// # Key Extraction
///
/// Clients are identified by peer IP address, or by forwarded headers when
/// [`AppState::behind_proxy`] is set (see [`client_identifier`]).
///
/// # Example
///
/// ```rust,ignore
/// let limited = Router::new()
///     .route("/analyze", post(analyze_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit::layer));
/// ```
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identifier = client_identifier(req.headers(), req.extensions(), state.behind_proxy);

    if !state.rate_limit_service.allow(&identifier) {
        return Err(AppError::rate_limited());
    }

    Ok(next.run(req).await)
}

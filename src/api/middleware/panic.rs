//! Conversion of handler panics into JSON 500 responses.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::AppError;

/// Response factory for [`tower_http::catch_panic::CatchPanicLayer`].
///
/// The panic payload is logged and never sent to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal(format!("Handler panicked: {detail}"), json!({})).into_response()
}

//! Application error type and its HTTP representation.
//!
//! Every failure leaves the service in the same JSON envelope:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "validation_error",
//!     "message": "Validation failed",
//!     "details": { "presentationId": ["presentationId may only contain letters, digits, '_' and '-'"] }
//!   }
//! }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Response message for requests rejected by the rate limiter.
pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Please try again later.";

/// Message returned in place of internal error details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Top-level error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

/// Machine-readable error code, human-readable message and structured details.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
    #[schema(value_type = Object)]
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client-supplied data failed a declared constraint (422).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Request could not be interpreted at all, e.g. an untrusted `Host` (400).
    #[error("{message}")]
    BadRequest { message: String, details: Value },

    /// Too many requests from one client inside the limiter window (429).
    #[error("{message}")]
    RateLimited { message: String, details: Value },

    /// The feature exists in the API surface but has no implementation (501).
    #[error("{message}")]
    NotImplemented { message: String, details: Value },

    /// Anything else. The message is logged, never sent to the client (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    pub fn rate_limited() -> Self {
        Self::RateLimited {
            message: RATE_LIMITED_MESSAGE.to_string(),
            details: json!({}),
        }
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented {
            message: message.into(),
            details: json!({}),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the client-facing payload.
    ///
    /// Internal errors are redacted: the original message and details are
    /// replaced with [`INTERNAL_ERROR_MESSAGE`] and an empty object.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => {
                ("validation_error", message.clone(), details.clone())
            }
            AppError::BadRequest { message, details } => {
                ("bad_request", message.clone(), details.clone())
            }
            AppError::RateLimited { message, details } => {
                ("rate_limited", message.clone(), details.clone())
            }
            AppError::NotImplemented { message, details } => {
                ("not_implemented", message.clone(), details.clone())
            }
            AppError::Internal { .. } => (
                "internal_error",
                INTERNAL_ERROR_MESSAGE.to_string(),
                json!({}),
            ),
        };

        ErrorInfo {
            code: code.to_string(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, details } = &self {
            tracing::error!(%message, %details, "Request failed with internal error");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Map::new();

        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .map(Value::String)
                .collect();

            fields.insert(wire_field_name(&field), Value::Array(messages));
        }

        AppError::validation("Validation failed", Value::Object(fields))
    }
}

/// Converts a struct field name to the camelCase key clients send.
fn wire_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;

    for c in field.chars() {
        if c == '_' {
            upper = !name.is_empty();
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }

    name
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(max = 3, message = "too long"))]
        name: String,
        #[validate(range(max = 10))]
        count: u32,
        #[validate(length(min = 1))]
        file_url: String,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation("x", json!({})).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::rate_limited().status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AppError::not_implemented("x").status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
        assert_eq!(
            AppError::internal("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_is_redacted() {
        let err = AppError::internal(
            "connection refused: 10.0.0.3:5432",
            json!({"host": "10.0.0.3"}),
        );
        let info = err.to_error_info();

        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, INTERNAL_ERROR_MESSAGE);
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_rate_limited_message_is_static() {
        let info = AppError::rate_limited().to_error_info();
        assert_eq!(info.code, "rate_limited");
        assert_eq!(info.message, RATE_LIMITED_MESSAGE);
    }

    #[test]
    fn test_validation_errors_are_grouped_by_field() {
        let sample = Sample {
            name: "abcdef".to_string(),
            count: 11,
            file_url: String::new(),
        };

        let err: AppError = sample.validate().unwrap_err().into();
        let info = err.to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.details["name"], json!(["too long"]));
        assert_eq!(info.details["count"], json!(["range"]));
        assert_eq!(info.details["fileUrl"], json!(["length"]));
        assert!(info.details.get("file_url").is_none());
    }

    #[test]
    fn test_wire_field_name() {
        assert_eq!(wire_field_name("file_url"), "fileUrl");
        assert_eq!(wire_field_name("presentation_id"), "presentationId");
        assert_eq!(wire_field_name("slides"), "slides");
        assert_eq!(wire_field_name("_private"), "private");
    }
}

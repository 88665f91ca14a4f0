//! HTTP middleware for request processing and protection.
//!
//! - [`rate_limit`] - Per-client sliding-window limiter
//! - [`security_headers`] - Fixed defensive response headers
//! - [`trusted_host`] - Host allow-list (production)
//! - [`cors`] - Cross-origin policy
//! - [`panic`] - Panic to 500 conversion
//! - [`tracing`] - Request/response logging

pub mod cors;
pub mod panic;
pub mod rate_limit;
pub mod security_headers;
pub mod tracing;
pub mod trusted_host;

//! Helper functions shared by the HTTP middleware.
//!
//! - [`client_ip`] - Client identifier extraction for rate limiting
//! - [`host`] - Host header parsing and allow-list matching

pub mod client_ip;
pub mod host;

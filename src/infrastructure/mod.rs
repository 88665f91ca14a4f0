//! Infrastructure layer implementing the domain storage contracts.
//!
//! # Modules
//!
//! - [`rate_limit`] - In-memory sliding-window storage for the rate limiter

pub mod rate_limit;

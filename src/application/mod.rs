//! Application layer services implementing business logic.
//!
//! Services consume domain repository traits and provide a small API for the
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::rate_limit_service::RateLimitService`] - Sliding-window limiter per client
//! - [`services::presentation_service::PresentationService`] - Analysis and generation

pub mod services;

//! Business logic services for the application layer.

pub mod presentation_service;
pub mod rate_limit_service;

pub use presentation_service::PresentationService;
pub use rate_limit_service::RateLimitService;

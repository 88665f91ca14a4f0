//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for service tests.
//!
//! # Available Repositories
//!
//! - [`RateLimitRepository`] - Sliding-window request timestamps per client

pub mod rate_limit_repository;

pub use rate_limit_repository::RateLimitRepository;

#[cfg(test)]
pub use rate_limit_repository::MockRateLimitRepository;

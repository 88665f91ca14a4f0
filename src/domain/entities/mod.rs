//! Core domain entities.
//!
//! Entities are plain data structures shared between the application services
//! and the infrastructure that stores them.
//!
//! # Entity Types
//!
//! - [`RateLimitPolicy`] - Sliding-window limit applied per client identifier
//! - [`AnalysisAccepted`] - Acknowledgment of a presentation analysis request

pub mod analysis;
pub mod rate_limit;

pub use analysis::{AnalysisAccepted, AnalysisStatus};
pub use rate_limit::RateLimitPolicy;

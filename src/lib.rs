//! # ClientView API
//!
//! HTTP backend for analyzing uploaded PowerPoint presentations and
//! regenerating them from templates, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and storage traits
//! - **Application Layer** ([`application`]) - Rate limiting and presentation services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory rate limiter storage
//! - **API Layer** ([`api`]) - Handlers, DTOs, validation and middleware
//!
//! ## Request Flow
//!
//! 1. Tracing span opens and security headers are scheduled for the response
//! 2. Host is checked against the allow-list (production only)
//! 3. CORS preflights are answered
//! 4. Business routes pass the per-client sliding-window rate limiter
//! 5. The JSON body is deserialized and validated ([`api::extract::ValidatedJson`])
//! 6. The handler delegates to [`application::services::PresentationService`]
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod metrics;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PresentationService, RateLimitService};
    pub use crate::config::{Config, Environment};
    pub use crate::domain::entities::RateLimitPolicy;
    pub use crate::error::AppError;
    pub use crate::routes::{app, app_router};
    pub use crate::state::AppState;
}

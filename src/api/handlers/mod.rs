//! HTTP request handlers for API endpoints.

pub mod analyze;
pub mod docs;
pub mod generate;
pub mod health;
pub mod metrics;

pub use analyze::analyze_handler;
pub use docs::openapi_handler;
pub use generate::generate_handler;
pub use health::{health_handler, root_handler};
pub use metrics::metrics_handler;

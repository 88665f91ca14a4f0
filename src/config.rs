//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then passed by
//! reference to the router builder. Request handling never reads the process
//! environment.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ENVIRONMENT` - `production` enables host header validation; anything else
//!   is development and exposes the OpenAPI document (default: `development`)
//! - `ALLOWED_ORIGINS` - Comma-separated CORS origins (default: `http://localhost:3000`)
//! - `ALLOWED_HOSTS` - Comma-separated host patterns accepted in production,
//!   `*.` prefix matches subdomains (default: `*.vercel.app,*.railway.app,localhost,127.0.0.1`)
//! - `RATE_LIMIT_MAX_REQUESTS` - Requests per client per window (default: 100)
//! - `RATE_LIMIT_WINDOW_SECONDS` - Sliding window length (default: 60)
//! - `BEHIND_PROXY` - Key the rate limiter on `X-Forwarded-For` / `X-Real-IP`
//!   (default: `false`)
//! - `METRICS_ENABLED` - Install the Prometheus recorder and serve `/metrics`
//!   (default: `false`)

use anyhow::Result;
use axum::http::HeaderValue;
use std::env;
use std::fmt;
use std::time::Duration;

use crate::domain::entities::RateLimitPolicy;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_ALLOWED_HOSTS: &str = "*.vercel.app,*.railway.app,localhost,127.0.0.1";

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parses an `ENVIRONMENT` value.
    ///
    /// Only `production` (case-insensitive) selects production; every other
    /// value, including an empty one, means development.
    pub fn from_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub environment: Environment,
    /// Origins allowed to make credentialed cross-origin requests.
    pub allowed_origins: Vec<String>,
    /// Host patterns accepted in production. `*.example.com` matches any subdomain.
    pub allowed_hosts: Vec<String>,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_seconds: u64,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Install the Prometheus recorder and expose `GET /metrics`.
    pub metrics_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        let policy = RateLimitPolicy::default();

        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            environment: Environment::Development,
            allowed_origins: split_list(DEFAULT_ALLOWED_ORIGINS),
            allowed_hosts: split_list(DEFAULT_ALLOWED_HOSTS),
            rate_limit_max_requests: policy.max_requests,
            rate_limit_window_seconds: policy.window.as_secs(),
            behind_proxy: false,
            metrics_enabled: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric values fall back to their defaults.
    /// Call [`Config::validate`] before using the result.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let environment = env::var("ENVIRONMENT")
            .map(|v| Environment::from_value(&v))
            .unwrap_or_default();

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|v| split_list(&v))
            .unwrap_or(defaults.allowed_origins);

        let allowed_hosts = env::var("ALLOWED_HOSTS")
            .map(|v| split_list(&v))
            .unwrap_or(defaults.allowed_hosts);

        let rate_limit_max_requests = env::var("RATE_LIMIT_MAX_REQUESTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_max_requests);

        let rate_limit_window_seconds = env::var("RATE_LIMIT_WINDOW_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_window_seconds);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.behind_proxy);

        let metrics_enabled = env::var("METRICS_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.metrics_enabled);

        Self {
            listen_addr,
            log_level,
            log_format,
            environment,
            allowed_origins,
            allowed_hosts,
            rate_limit_max_requests,
            rate_limit_window_seconds,
            behind_proxy,
            metrics_enabled,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - rate limit values are zero
    /// - `allowed_origins` is empty, contains `*`, or contains an invalid header value
    /// - `allowed_hosts` is empty in production
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.rate_limit_max_requests == 0 {
            anyhow::bail!("RATE_LIMIT_MAX_REQUESTS must be at least 1");
        }

        if self.rate_limit_window_seconds == 0 {
            anyhow::bail!("RATE_LIMIT_WINDOW_SECONDS must be greater than 0");
        }

        if self.allowed_origins.is_empty() {
            anyhow::bail!("ALLOWED_ORIGINS must list at least one origin");
        }

        // Credentials are allowed, which browsers refuse to combine with a wildcard origin.
        for origin in &self.allowed_origins {
            if origin == "*" {
                anyhow::bail!("ALLOWED_ORIGINS must not contain '*' because credentials are allowed");
            }
            if HeaderValue::from_str(origin).is_err() {
                anyhow::bail!("ALLOWED_ORIGINS contains an invalid origin: '{}'", origin);
            }
        }

        if self.is_production() && self.allowed_hosts.is_empty() {
            anyhow::bail!("ALLOWED_HOSTS must list at least one host in production");
        }

        Ok(())
    }

    /// Returns whether production behavior is enabled.
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Rate limiter policy derived from the configured limits.
    pub fn rate_limit_policy(&self) -> RateLimitPolicy {
        RateLimitPolicy::new(
            self.rate_limit_max_requests,
            Duration::from_secs(self.rate_limit_window_seconds),
        )
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Allowed origins: {}", self.allowed_origins.join(", "));

        if self.is_production() {
            tracing::info!("  Allowed hosts: {}", self.allowed_hosts.join(", "));
        }

        tracing::info!(
            "  Rate limit: {} requests / {}s (client address from {})",
            self.rate_limit_max_requests,
            self.rate_limit_window_seconds,
            if self.behind_proxy {
                "forwarded headers"
            } else {
                "peer socket"
            }
        );
        tracing::info!(
            "  Metrics: {}",
            if self.metrics_enabled { "/metrics" } else { "disabled" }
        );
    }
}

/// `true` or `1`, case-insensitive.
fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true") || value.trim() == "1"
}

/// Splits a comma-separated list, trimming entries and dropping blanks.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

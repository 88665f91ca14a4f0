//! Rate limiting policy shared by the limiter service and its storage.

use std::time::{Duration, Instant};

/// Default number of requests allowed per identifier inside one window.
pub const DEFAULT_MAX_REQUESTS: usize = 100;

/// Default sliding window length.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Sliding-window limit: at most `max_requests` accepted requests per
/// identifier within any `window`-long interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_requests: usize,
    pub window: Duration,
}

impl RateLimitPolicy {
    /// Creates a policy with the given limit and window.
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }

    /// Start of the window ending at `now`.
    ///
    /// Timestamps at or before this instant no longer count against the limit.
    /// Returns `None` when the window reaches back past the earliest instant the
    /// platform can represent, in which case nothing has expired yet.
    pub fn window_start(&self, now: Instant) -> Option<Instant> {
        now.checked_sub(self.window)
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }
}

//! Per-client request rate limiting.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::entities::RateLimitPolicy;
use crate::domain::repositories::RateLimitRepository;
use crate::metrics::names;

/// Sliding-window rate limiter keyed by client identifier.
///
/// The service owns the policy; the repository owns the timestamps. Both are
/// injected, so tests and alternative deployments can substitute either.
pub struct RateLimitService<R: RateLimitRepository> {
    repository: Arc<R>,
    policy: RateLimitPolicy,
}

impl<R: RateLimitRepository> RateLimitService<R> {
    /// Creates a rate limiter over the given storage and policy.
    pub fn new(repository: Arc<R>, policy: RateLimitPolicy) -> Self {
        Self { repository, policy }
    }

    /// Returns the active policy.
    pub fn policy(&self) -> &RateLimitPolicy {
        &self.policy
    }

    /// Checks and records a request from `identifier` at the current instant.
    ///
    /// Returns `false` when the identifier already made `max_requests`
    /// accepted requests within the last `window`.
    pub fn allow(&self, identifier: &str) -> bool {
        self.allow_at(identifier, Instant::now())
    }

    /// Same as [`allow`](Self::allow) with an explicit clock reading.
    pub fn allow_at(&self, identifier: &str, now: Instant) -> bool {
        let allowed = self.repository.try_record(identifier, now, &self.policy);

        if !allowed {
            tracing::warn!(
                identifier,
                max_requests = self.policy.max_requests,
                window_secs = self.policy.window.as_secs(),
                "Rate limit exceeded"
            );
            metrics::counter!(names::RATE_LIMIT_REJECTIONS_TOTAL).increment(1);
        }

        allowed
    }

    /// Number of distinct identifiers seen since startup.
    pub fn tracked_identifiers(&self) -> usize {
        self.repository.tracked_identifiers()
    }
}

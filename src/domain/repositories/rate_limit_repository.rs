//! Repository trait for rate limiter state.

use crate::domain::entities::RateLimitPolicy;
use std::time::Instant;

/// Storage for per-identifier request timestamps.
///
/// Implementations must make [`try_record`](Self::try_record) atomic with
/// respect to a single identifier: pruning, counting and appending happen as
/// one step, or concurrent requests could both slip under the limit.
///
/// # Implementations
///
/// - [`crate::infrastructure::rate_limit::InMemoryRateLimitRepository`] - process-local map behind a mutex
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait RateLimitRepository: Send + Sync {
    /// Records a request for `identifier` at `now` if the policy allows it.
    ///
    /// Drops every stored timestamp at or before `now - policy.window`. If the
    /// remaining count is already `policy.max_requests` or more, nothing is
    /// recorded and `false` is returned. Otherwise `now` is appended and the
    /// call returns `true`.
    fn try_record(&self, identifier: &str, now: Instant, policy: &RateLimitPolicy) -> bool;

    /// Number of identifiers currently holding state.
    fn tracked_identifiers(&self) -> usize;
}

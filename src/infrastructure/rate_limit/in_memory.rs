//! Process-local sliding-window storage.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::domain::entities::RateLimitPolicy;
use crate::domain::repositories::RateLimitRepository;

/// Request timestamps per identifier, held in memory.
///
/// All mutations go through one mutex, so the limit is exact under concurrent
/// requests. State is not shared between processes: with several replicas each
/// one enforces its own limit.
///
/// Identifiers are never evicted. Their timestamp queues are trimmed lazily on
/// the next request from the same identifier.
#[derive(Debug, Default)]
pub struct InMemoryRateLimitRepository {
    requests: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl InMemoryRateLimitRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timestamps currently stored for `identifier`, without pruning.
    pub fn stored_requests(&self, identifier: &str) -> usize {
        self.lock().get(identifier).map_or(0, VecDeque::len)
    }

    // A panic while holding the lock leaves the map structurally valid.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, VecDeque<Instant>>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RateLimitRepository for InMemoryRateLimitRepository {
    fn try_record(&self, identifier: &str, now: Instant, policy: &RateLimitPolicy) -> bool {
        let mut requests = self.lock();
        let timestamps = requests.entry(identifier.to_string()).or_default();

        // Timestamps are appended in arrival order, so expired ones sit at the front.
        if let Some(window_start) = policy.window_start(now) {
            while timestamps.front().is_some_and(|&t| t <= window_start) {
                timestamps.pop_front();
            }
        }

        if timestamps.len() >= policy.max_requests {
            return false;
        }

        timestamps.push_back(now);
        true
    }

    fn tracked_identifiers(&self) -> usize {
        self.lock().len()
    }
}

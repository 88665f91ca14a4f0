//! Rate limiter storage implementations.

mod in_memory;

pub use in_memory::InMemoryRateLimitRepository;

//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

use crate::domain::entities::ShortLink;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching resolved short links by code.
///
/// Implementations must be thread-safe. Cache failures degrade to store
/// lookups and never fail a request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached link.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn get_link(&self, short_code: i64) -> CacheResult<Option<ShortLink>>;

    /// Stores a link with an optional TTL (implementation default if `None`).
    async fn set_link(&self, link: &ShortLink, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}

//! Repository trait for sequence counters.

use crate::domain::entities::Counter;
use crate::error::AppError;
use async_trait::async_trait;

/// Persistent store of named counters.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCounterRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - In-process implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Atomically increments the counter for `name` and returns the new value.
    ///
    /// A missing counter is created with value 1. The read-modify-write is a
    /// single indivisible store operation, so concurrent callers never observe
    /// the same value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store cannot complete the operation.
    async fn increment(&self, name: &str) -> Result<i64, AppError>;

    /// Reads the current state of a counter without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn find(&self, name: &str) -> Result<Option<Counter>, AppError>;
}

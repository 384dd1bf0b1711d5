//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registered short links.
///
/// Links are never updated or deleted, so the interface is insert and lookups only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Finds the link registered for exactly this URL (byte-for-byte match).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<ShortLink>, AppError>;

    /// Finds the link with the given short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn find_by_code(&self, short_code: i64) -> Result<Option<ShortLink>, AppError>;

    /// Persists a new link unless its URL is already registered.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` when the row was inserted
    /// - `Ok(None)` when another link already holds `original_url`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors, including a duplicate `short_code`.
    async fn insert(&self, new_link: NewShortLink) -> Result<Option<ShortLink>, AppError>;

    /// Counts registered links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Performs a trivial round trip to check store connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}

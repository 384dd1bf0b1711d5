//! Short code resolution.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Looks up registered links by short code.
///
/// # Cache Strategy
///
/// Links never change once created, so cached entries are always valid.
///
/// - **Cache hit**: returned without touching the store
/// - **Cache miss**: read from the store, cache written in the background
/// - **Cache error**: logged, falls back to the store
pub struct Resolver<L: ShortLinkRepository + ?Sized> {
    links: Arc<L>,
    cache: Arc<dyn CacheService>,
}

impl<L: ShortLinkRepository + ?Sized> Resolver<L> {
    pub fn new(links: Arc<L>, cache: Arc<dyn CacheService>) -> Self {
        Self { links, cache }
    }

    /// Returns the link registered under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Store`] on store errors.
    pub async fn resolve(&self, code: i64) -> Result<ShortLink, AppError> {
        match self.cache.get_link(code).await {
            Ok(Some(link)) => {
                tracing::debug!(code, "cache hit");
                return Ok(link);
            }
            Ok(None) => tracing::debug!(code, "cache miss"),
            Err(e) => tracing::error!(code, error = %e, "cache error"),
        }

        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))?;

        let cache = self.cache.clone();
        let cached = link.clone();
        tokio::spawn(async move {
            if let Err(e) = cache.set_link(&cached, None).await {
                tracing::warn!(code = cached.short_code, error = %e, "failed to cache link");
            }
        });

        Ok(link)
    }
}

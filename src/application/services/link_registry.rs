//! Deduplicating short link registration.

use std::sync::Arc;

use crate::application::services::SequenceAllocator;
use crate::domain::entities::{NewShortLink, SHORT_LINK_NAMESPACE, ShortLink};
use crate::domain::repositories::{CounterRepository, ShortLinkRepository};
use crate::domain::valid_url::ValidUrl;
use crate::error::AppError;

/// Registers validated URLs and hands back their short links.
///
/// # Deduplication
///
/// A URL that is already registered (exact string match) returns its existing
/// link; nothing is allocated or written.
///
/// # Concurrent first registrations
///
/// Lookup, allocation and insert are three separate store round trips. The
/// insert is guarded by a uniqueness constraint on `original_url`: when two
/// requests race to register the same new URL, the loser's insert is a no-op
/// and it returns the winner's link. The loser's allocated code stays unused.
pub struct LinkRegistry<L, C>
where
    L: ShortLinkRepository + ?Sized,
    C: CounterRepository + ?Sized,
{
    links: Arc<L>,
    allocator: SequenceAllocator<C>,
}

impl<L, C> LinkRegistry<L, C>
where
    L: ShortLinkRepository + ?Sized,
    C: CounterRepository + ?Sized,
{
    /// Creates a registry over the given link and counter stores.
    pub fn new(links: Arc<L>, counters: Arc<C>) -> Self {
        Self {
            links,
            allocator: SequenceAllocator::new(counters),
        }
    }

    /// Returns the link for `url`, creating it on first registration.
    ///
    /// # Errors
    ///
    /// - [`AppError::Allocation`] if no code could be allocated (nothing is persisted)
    /// - [`AppError::Store`] if the lookup or insert fails
    pub async fn register(&self, url: ValidUrl) -> Result<ShortLink, AppError> {
        if let Some(existing) = self.links.find_by_original_url(url.as_str()).await? {
            tracing::debug!(code = existing.short_code, "URL already registered");
            metrics::counter!("shorturl_dedup_hits_total").increment(1);
            return Ok(existing);
        }

        let short_code = self.allocator.next_sequence(SHORT_LINK_NAMESPACE).await?;
        let original_url = url.into_inner();

        let inserted = self
            .links
            .insert(NewShortLink {
                original_url: original_url.clone(),
                short_code,
            })
            .await?;

        match inserted {
            Some(link) => {
                tracing::info!(code = link.short_code, url = %link.original_url, "short link created");
                metrics::counter!("shorturl_created_total").increment(1);
                Ok(link)
            }
            None => {
                tracing::warn!(
                    unused_code = short_code,
                    "concurrent registration of the same URL, returning existing link"
                );
                metrics::counter!("shorturl_dedup_hits_total").increment(1);
                self.links
                    .find_by_original_url(&original_url)
                    .await?
                    .ok_or_else(|| {
                        AppError::store("insert conflicted but no link holds the URL")
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockCounterRepository, MockShortLinkRepository};
    use chrono::Utc;
    use mockall::Sequence;

    fn create_test_link(code: i64, url: &str) -> ShortLink {
        ShortLink::new(code, url.to_string(), code, Utc::now())
    }

    fn valid(url: &str) -> ValidUrl {
        ValidUrl::parse(url).unwrap()
    }

    #[tokio::test]
    async fn test_register_new_url_allocates_and_inserts() {
        let mut mock_links = MockShortLinkRepository::new();
        let mut mock_counters = MockCounterRepository::new();

        mock_links
            .expect_find_by_original_url()
            .withf(|url| url == "https://www.freecodecamp.org")
            .times(1)
            .returning(|_| Ok(None));

        mock_counters
            .expect_increment()
            .withf(|name| name == SHORT_LINK_NAMESPACE)
            .times(1)
            .returning(|_| Ok(1));

        mock_links
            .expect_insert()
            .withf(|new_link| {
                new_link.short_code == 1 && new_link.original_url == "https://www.freecodecamp.org"
            })
            .times(1)
            .returning(|new_link| Ok(Some(create_test_link(new_link.short_code, &new_link.original_url))));

        let registry = LinkRegistry::new(Arc::new(mock_links), Arc::new(mock_counters));

        let link = registry
            .register(valid("https://www.freecodecamp.org"))
            .await
            .unwrap();

        assert_eq!(link.short_code, 1);
        assert_eq!(link.original_url, "https://www.freecodecamp.org");
    }

    #[tokio::test]
    async fn test_register_existing_url_is_idempotent() {
        let mut mock_links = MockShortLinkRepository::new();
        let mut mock_counters = MockCounterRepository::new();

        let existing = create_test_link(5, "https://example.com");
        mock_links
            .expect_find_by_original_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_counters.expect_increment().times(0);
        mock_links.expect_insert().times(0);

        let registry = LinkRegistry::new(Arc::new(mock_links), Arc::new(mock_counters));

        let link = registry.register(valid("https://example.com")).await.unwrap();
        assert_eq!(link.short_code, 5);
    }

    #[tokio::test]
    async fn test_register_lost_race_returns_winner() {
        let mut mock_links = MockShortLinkRepository::new();
        let mut mock_counters = MockCounterRepository::new();
        let mut seq = Sequence::new();

        mock_links
            .expect_find_by_original_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        mock_counters.expect_increment().times(1).returning(|_| Ok(8));

        mock_links
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        let winner = create_test_link(7, "https://race.example.com");
        mock_links
            .expect_find_by_original_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(winner.clone())));

        let registry = LinkRegistry::new(Arc::new(mock_links), Arc::new(mock_counters));

        let link = registry
            .register(valid("https://race.example.com"))
            .await
            .unwrap();
        assert_eq!(link.short_code, 7);
    }

    #[tokio::test]
    async fn test_register_allocation_failure_persists_nothing() {
        let mut mock_links = MockShortLinkRepository::new();
        let mut mock_counters = MockCounterRepository::new();

        mock_links
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_counters
            .expect_increment()
            .times(1)
            .returning(|_| Err(AppError::store("pool timed out")));

        mock_links.expect_insert().times(0);

        let registry = LinkRegistry::new(Arc::new(mock_links), Arc::new(mock_counters));

        let err = registry
            .register(valid("https://example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Allocation { .. }));
    }

    #[tokio::test]
    async fn test_register_lookup_failure_is_store_error() {
        let mut mock_links = MockShortLinkRepository::new();
        let mut mock_counters = MockCounterRepository::new();

        mock_links
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Err(AppError::store("connection reset")));
        mock_counters.expect_increment().times(0);

        let registry = LinkRegistry::new(Arc::new(mock_links), Arc::new(mock_counters));

        let err = registry
            .register(valid("https://example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Store { .. }));
    }
}

//! Per-namespace sequence allocation.

use std::sync::Arc;

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Hands out strictly increasing integers per namespace.
///
/// Every call is one atomic increment in the store, so concurrent callers
/// targeting the same namespace always receive distinct values. Values
/// increase in the order the store applies the increments; gaps are possible
/// (an allocated value whose link is never persisted is simply skipped).
pub struct SequenceAllocator<C: CounterRepository + ?Sized> {
    counters: Arc<C>,
}

impl<C: CounterRepository + ?Sized> SequenceAllocator<C> {
    pub fn new(counters: Arc<C>) -> Self {
        Self { counters }
    }

    /// Returns the next value of `namespace`, creating the counter at 1 on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Allocation`] if the store cannot perform the increment.
    /// No value is ever fabricated locally.
    pub async fn next_sequence(&self, namespace: &str) -> Result<i64, AppError> {
        match self.counters.increment(namespace).await {
            Ok(value) => {
                tracing::debug!(namespace, value, "allocated sequence value");
                Ok(value)
            }
            Err(e) => {
                tracing::error!(namespace, error = %e, "sequence allocation failed");
                Err(AppError::Allocation {
                    namespace: namespace.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCounterRepository;
    use mockall::Sequence;

    #[tokio::test]
    async fn test_next_sequence_returns_store_value() {
        let mut mock_counters = MockCounterRepository::new();
        mock_counters
            .expect_increment()
            .withf(|name| name == "short")
            .times(1)
            .returning(|_| Ok(1));

        let allocator = SequenceAllocator::new(Arc::new(mock_counters));

        assert_eq!(allocator.next_sequence("short").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_next_sequence_passes_through_increasing_values() {
        let mut mock_counters = MockCounterRepository::new();
        let mut seq = Sequence::new();
        for value in 1..=3 {
            mock_counters
                .expect_increment()
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| Ok(value));
        }

        let allocator = SequenceAllocator::new(Arc::new(mock_counters));

        let a = allocator.next_sequence("short").await.unwrap();
        let b = allocator.next_sequence("short").await.unwrap();
        let c = allocator.next_sequence("short").await.unwrap();
        assert!(a < b && b < c);
    }

    #[tokio::test]
    async fn test_store_failure_becomes_allocation_error() {
        let mut mock_counters = MockCounterRepository::new();
        mock_counters
            .expect_increment()
            .times(1)
            .returning(|_| Err(AppError::store("connection refused")));

        let allocator = SequenceAllocator::new(Arc::new(mock_counters));

        let err = allocator.next_sequence("short").await.unwrap_err();
        match err {
            AppError::Allocation { namespace, message } => {
                assert_eq!(namespace, "short");
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

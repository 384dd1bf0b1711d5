//! Submitted URL validation.

use std::sync::Arc;

use crate::domain::host_resolver::HostResolver;
use crate::domain::valid_url::{UrlValidationError, ValidUrl};
use crate::error::AppError;

/// Accepts absolute http/https URLs and optionally checks the host resolves.
///
/// The DNS check is off by default: it produces false negatives in sandboxed
/// networks and says nothing about reachability at redirect time.
pub struct UrlValidator {
    check_dns: bool,
    resolver: Arc<dyn HostResolver>,
}

impl UrlValidator {
    pub fn new(check_dns: bool, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            check_dns,
            resolver,
        }
    }

    pub fn dns_enabled(&self) -> bool {
        self.check_dns
    }

    /// Validates `input`, returning the accepted URL verbatim.
    ///
    /// Never touches the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the syntax check fails or, with DNS
    /// checking enabled, the host does not resolve.
    pub async fn validate(&self, input: &str) -> Result<ValidUrl, AppError> {
        let url = ValidUrl::parse(input).map_err(|e| {
            tracing::debug!(input, reason = %e, "rejected URL");
            AppError::invalid_url(e.to_string())
        })?;

        if self.check_dns && !self.resolver.resolves(url.host()).await {
            let e = UrlValidationError::Unresolvable(url.host().to_string());
            tracing::debug!(input, reason = %e, "rejected URL");
            return Err(AppError::invalid_url(e.to_string()));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::host_resolver::MockHostResolver;

    #[tokio::test]
    async fn test_dns_disabled_never_resolves() {
        let mut mock_resolver = MockHostResolver::new();
        mock_resolver.expect_resolves().times(0);

        let validator = UrlValidator::new(false, Arc::new(mock_resolver));

        let url = validator
            .validate("https://does-not-exist.invalid")
            .await
            .unwrap();
        assert_eq!(url.as_str(), "https://does-not-exist.invalid");
    }

    #[tokio::test]
    async fn test_syntax_rejected_before_dns() {
        let mut mock_resolver = MockHostResolver::new();
        mock_resolver.expect_resolves().times(0);

        let validator = UrlValidator::new(true, Arc::new(mock_resolver));

        for input in ["ftp://example.com", "not a url", ""] {
            let err = validator.validate(input).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidUrl { .. }));
        }
    }

    #[tokio::test]
    async fn test_dns_enabled_accepts_resolving_host() {
        let mut mock_resolver = MockHostResolver::new();
        mock_resolver
            .expect_resolves()
            .withf(|host| host == "www.freecodecamp.org")
            .times(1)
            .returning(|_| true);

        let validator = UrlValidator::new(true, Arc::new(mock_resolver));

        assert!(
            validator
                .validate("https://www.freecodecamp.org")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_dns_enabled_rejects_unresolvable_host() {
        let mut mock_resolver = MockHostResolver::new();
        mock_resolver.expect_resolves().times(1).returning(|_| false);

        let validator = UrlValidator::new(true, Arc::new(mock_resolver));

        let err = validator
            .validate("https://nowhere.invalid")
            .await
            .unwrap_err();
        match err {
            AppError::InvalidUrl { reason } => assert!(reason.contains("nowhere.invalid")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

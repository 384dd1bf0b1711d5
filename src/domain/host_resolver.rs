//! Hostname resolution contract for the optional reachability check.

use async_trait::async_trait;

/// Resolves hostnames to network addresses.
///
/// Used by [`crate::application::services::UrlValidator`] when DNS checking
/// is enabled. The production implementation is
/// [`crate::infrastructure::dns::DnsResolver`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns true if `host` resolves to at least one address.
    async fn resolves(&self, host: &str) -> bool;
}

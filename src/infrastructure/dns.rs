//! System resolver backed [`HostResolver`].

use async_trait::async_trait;
use std::net::IpAddr;

use crate::domain::host_resolver::HostResolver;

/// Resolves hostnames with the operating system resolver via `tokio::net::lookup_host`.
///
/// IP literals resolve trivially.
#[derive(Debug, Default, Clone, Copy)]
pub struct DnsResolver;

impl DnsResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolves(&self, host: &str) -> bool {
        if host.parse::<IpAddr>().is_ok() {
            return true;
        }

        match tokio::net::lookup_host((host, 80)).await {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(e) => {
                tracing::debug!(host, error = %e, "hostname lookup failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ip_literals_resolve() {
        let resolver = DnsResolver::new();
        assert!(resolver.resolves("127.0.0.1").await);
        assert!(resolver.resolves("::1").await);
    }

    #[tokio::test]
    async fn test_invalid_tld_does_not_resolve() {
        let resolver = DnsResolver::new();
        assert!(!resolver.resolves("no-such-host.invalid").await);
    }
}

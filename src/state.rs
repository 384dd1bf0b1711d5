//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkRegistry, Resolver, UrlValidator};
use crate::domain::repositories::{CounterRepository, ShortLinkRepository};
use crate::infrastructure::cache::CacheService;

/// Registry over whichever store backend the server was started with.
pub type DynLinkRegistry = LinkRegistry<dyn ShortLinkRepository, dyn CounterRepository>;

/// Resolver over whichever store backend the server was started with.
pub type DynResolver = Resolver<dyn ShortLinkRepository>;

/// Handles to the core services. Cloning is cheap (all fields are `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub url_validator: Arc<UrlValidator>,
    pub link_registry: Arc<DynLinkRegistry>,
    pub resolver: Arc<DynResolver>,
    pub links: Arc<dyn ShortLinkRepository>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires the services around explicit store handles.
    pub fn new(
        links: Arc<dyn ShortLinkRepository>,
        counters: Arc<dyn CounterRepository>,
        cache: Arc<dyn CacheService>,
        url_validator: UrlValidator,
    ) -> Self {
        Self {
            url_validator: Arc::new(url_validator),
            link_registry: Arc::new(LinkRegistry::new(links.clone(), counters)),
            resolver: Arc::new(Resolver::new(links.clone(), cache.clone())),
            links,
            cache,
        }
    }
}

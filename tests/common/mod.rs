#![allow(dead_code)]

use axum::{Router, routing::get};
use link_shortener::api::handlers::{health_handler, index_handler};
use link_shortener::api::routes::routes;
use link_shortener::application::services::UrlValidator;
use link_shortener::infrastructure::cache::NullCache;
use link_shortener::infrastructure::dns::DnsResolver;
use link_shortener::infrastructure::persistence::{
    MemoryStore, PgCounterRepository, PgShortLinkRepository,
};
use link_shortener::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    let store = Arc::new(MemoryStore::new());

    AppState::new(
        store.clone(),
        store,
        Arc::new(NullCache::new()),
        UrlValidator::new(false, Arc::new(DnsResolver::new())),
    )
}

pub fn create_pg_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    AppState::new(
        Arc::new(PgShortLinkRepository::new(pool.clone())),
        Arc::new(PgCounterRepository::new(pool)),
        Arc::new(NullCache::new()),
        UrlValidator::new(false, Arc::new(DnsResolver::new())),
    )
}

pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/api", routes())
        .with_state(state)
}

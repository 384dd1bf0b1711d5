//! HTTP server initialization and runtime setup.
//!
//! Handles store and cache setup and the Axum server lifecycle.

use crate::application::services::UrlValidator;
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::{CounterRepository, ShortLinkRepository};
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::dns::DnsResolver;
use crate::infrastructure::persistence::{
    MemoryStore, PgCounterRepository, PgShortLinkRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Store handles shared by the services.
pub struct Stores {
    pub links: Arc<dyn ShortLinkRepository>,
    pub counters: Arc<dyn CounterRepository>,
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured store (PostgreSQL pool + migrations, or in-memory)
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let stores = connect_stores(&config).await?;
    let cache = connect_cache(&config).await;

    let url_validator = UrlValidator::new(config.enable_dns, Arc::new(DnsResolver::new()));
    let state = AppState::new(stores.links, stores.counters, cache, url_validator);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the store selected by `config.store`.
///
/// # Errors
///
/// Returns an error if the PostgreSQL pool cannot be created or migrations fail.
pub async fn connect_stores(config: &Config) -> Result<Stores> {
    match config.store {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, links are lost on shutdown");
            let store = Arc::new(MemoryStore::new());
            Ok(Stores {
                links: store.clone(),
                counters: store,
            })
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required when STORE=postgres")?;

            let pool = connect_pool(config, database_url).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            let pool = Arc::new(pool);
            Ok(Stores {
                links: Arc::new(PgShortLinkRepository::new(pool.clone())),
                counters: Arc::new(PgCounterRepository::new(pool)),
            })
        }
    }
}

async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Connects to Redis when configured, falling back to [`NullCache`].
pub async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

/// Completes when the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::ShortLink;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache implementation for fast code lookups.
///
/// Links are stored as JSON under `short:<code>`. Uses `ConnectionManager`
/// for connection reuse. Operations are fail-open: errors are logged and
/// reported as misses.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_link`] is called
    ///   with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "short:".to_string(),
        })
    }

    fn build_key(&self, short_code: i64) -> String {
        format!("{}{}", self.key_prefix, short_code)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_link(&self, short_code: i64) -> CacheResult<Option<ShortLink>> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<ShortLink>(&raw) {
                Ok(link) => {
                    debug!("Cache HIT: {}", short_code);
                    Ok(Some(link))
                }
                Err(e) => {
                    warn!("Discarding undecodable cache entry {}: {}", key, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", short_code);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", short_code, e);
                Ok(None)
            }
        }
    }

    async fn set_link(&self, link: &ShortLink, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let key = self.build_key(link.short_code);
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);
        let raw = serde_json::to_string(link)
            .map_err(|e| CacheError::OperationError(format!("Failed to encode link: {}", e)))?;

        let mut conn = self.client.clone();
        match conn.set_ex::<_, _, ()>(&key, raw, ttl).await {
            Ok(()) => {
                debug!("Cache SET: {} (TTL: {}s)", link.short_code, ttl);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", link.short_code, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

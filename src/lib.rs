//! Posts API
//!
//! A content listing service backed by a repository abstraction with an
//! optional cache-aside decorator:
//! - `PostRepository` implemented by direct storage access (Postgres or
//!   in-memory) and by `CachedPostRepository`, which wraps another
//!   implementation and serves reads from a time-bounded cache
//! - Pluggable cache stores (moka in-memory, Redis)
//! - axum HTTP surface exposing the listing

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::AppState;
use domain::post::PostRepository;
use infrastructure::cache::{CacheBackend, CacheFactory, CacheStoreConfig};
use infrastructure::post::{
    CachedPostRepository, InMemoryPostRepository, PostCacheConfig, PostScope,
    PostgresPostRepository,
};
use sqlx::postgres::PgPoolOptions;

/// Wire the application state from configuration
///
/// Builds the base repository (Postgres when a database URL is configured,
/// otherwise an empty in-memory store) and, when caching is enabled, wraps it
/// in the cache-aside decorator.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let scope = if config.database.published_only {
        PostScope::Published
    } else {
        PostScope::All
    };

    let base: Arc<dyn PostRepository> = match &config.database.url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await?;

            tracing::info!("Connected to Postgres");
            Arc::new(PostgresPostRepository::with_scope(pool, scope))
        }
        None => {
            tracing::warn!("No database URL configured, using empty in-memory post repository");
            Arc::new(InMemoryPostRepository::with_scope(scope))
        }
    };

    let posts: Arc<dyn PostRepository> = if config.cache.enabled {
        let backend: CacheBackend = config.cache.backend.parse()?;
        let cache_config =
            PostCacheConfig::from_minutes(config.cache.ttl_minutes, config.cache.key_prefix.clone());

        let store_config = CacheStoreConfig {
            backend,
            redis_url: config.cache.redis_url.clone(),
            key_prefix: None,
            max_capacity: Some(config.cache.max_capacity),
            // Keep the store's eviction ceiling at or above the entry TTL so
            // a TTL above the store default is not silently capped
            max_ttl: Some(cache_config.ttl),
        };

        let cache = CacheFactory::create(store_config).await?;

        tracing::info!(
            backend = %backend,
            ttl_minutes = config.cache.ttl_minutes,
            "Caching post repository enabled"
        );

        Arc::new(CachedPostRepository::with_config(cache, base, cache_config))
    } else {
        base
    };

    Ok(AppState::new(posts))
}

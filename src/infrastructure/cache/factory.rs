//! Cache store factory for runtime selection

use std::sync::Arc;
use std::time::Duration;

use crate::domain::DomainError;
use crate::domain::cache::CacheStore;

use super::in_memory::{InMemoryCacheConfig, InMemoryCacheStore};
use super::redis::{RedisCacheConfig, RedisCacheStore};

/// Supported cache backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheBackend {
    /// In-memory cache using moka
    #[default]
    InMemory,
    /// Redis cache
    Redis,
}

impl std::fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheBackend::InMemory => write!(f, "in_memory"),
            CacheBackend::Redis => write!(f, "redis"),
        }
    }
}

impl std::str::FromStr for CacheBackend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(CacheBackend::InMemory),
            "redis" => Ok(CacheBackend::Redis),
            _ => Err(DomainError::configuration(format!(
                "Unknown cache backend: {}. Valid backends: in_memory, redis",
                s
            ))),
        }
    }
}

/// Configuration for the cache factory
#[derive(Debug, Clone, Default)]
pub struct CacheStoreConfig {
    /// Backend to create
    pub backend: CacheBackend,
    /// Redis URL (required for the Redis backend)
    pub redis_url: Option<String>,
    /// Key prefix for namespacing (Redis only)
    pub key_prefix: Option<String>,
    /// Maximum capacity (in-memory only)
    pub max_capacity: Option<u64>,
    /// Ceiling on how long any entry may live (in-memory only); must be at
    /// least the longest TTL callers will store with, or entries are evicted
    /// before their own deadline
    pub max_ttl: Option<Duration>,
}

impl CacheStoreConfig {
    /// Configuration for the in-memory backend
    pub fn in_memory() -> Self {
        Self {
            backend: CacheBackend::InMemory,
            ..Default::default()
        }
    }

    /// Configuration for the Redis backend
    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            backend: CacheBackend::Redis,
            redis_url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = Some(capacity);
        self
    }

    pub fn with_max_ttl(mut self, ttl: Duration) -> Self {
        self.max_ttl = Some(ttl);
        self
    }
}

/// Factory that builds a [`CacheStore`] from configuration
pub struct CacheFactory;

impl CacheFactory {
    pub async fn create(config: CacheStoreConfig) -> Result<Arc<dyn CacheStore>, DomainError> {
        match config.backend {
            CacheBackend::InMemory => {
                let mut mem_config = InMemoryCacheConfig::default();

                if let Some(capacity) = config.max_capacity {
                    mem_config = mem_config.with_max_capacity(capacity);
                }

                if let Some(max_ttl) = config.max_ttl {
                    mem_config = mem_config.with_max_ttl(max_ttl);
                }

                Ok(Arc::new(InMemoryCacheStore::with_config(mem_config)))
            }
            CacheBackend::Redis => {
                let url = config.redis_url.ok_or_else(|| {
                    DomainError::configuration("Redis cache backend requires a redis_url")
                })?;

                let mut redis_config = RedisCacheConfig::new(url);

                if let Some(prefix) = config.key_prefix {
                    redis_config = redis_config.with_key_prefix(prefix);
                }

                Ok(Arc::new(RedisCacheStore::new(redis_config).await?))
            }
        }
    }
}

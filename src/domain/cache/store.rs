//! Cache store trait definition

use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::domain::DomainError;

/// Generic key-value cache with per-key expiration
///
/// This trait uses JSON strings internally to be dyn-compatible. Use
/// [`CacheStoreExt`] for typed operations and the get-or-compute primitive.
#[async_trait]
pub trait CacheStore: Send + Sync + Debug {
    /// Gets a raw JSON value from the cache; expired entries read as absent
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Sets a raw JSON value with expiry = now + ttl
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Deletes a value from the cache, returning whether it existed
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// Checks if a key exists and is unexpired
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get_raw(key).await?.is_some())
    }

    /// Gets the remaining TTL for a key
    async fn ttl(&self, key: &str) -> Result<Option<Duration>, DomainError>;
}

/// Extension trait providing typed operations over a [`CacheStore`]
pub trait CacheStoreExt: CacheStore {
    /// Gets a typed value from the cache
    fn get<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl Future<Output = Result<Option<V>, DomainError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            match self.get_raw(key).await? {
                Some(data) => {
                    let value: V = serde_json::from_str(&data).map_err(|e| {
                        DomainError::cache(format!("Failed to deserialize cache value: {}", e))
                    })?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        }
    }

    /// Sets a typed value in the cache with a TTL
    fn set<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), DomainError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let data = serde_json::to_string(value).map_err(|e| {
                DomainError::cache(format!("Failed to serialize cache value: {}", e))
            })?;
            self.set_raw(key, &data, ttl).await
        }
    }

    /// Returns the cached value under `key` if present and fresh; otherwise
    /// awaits `compute`, stores its result with expiry = now + ttl, and
    /// returns it
    ///
    /// `compute` is evaluated only on miss. An `Err` from it propagates
    /// unchanged and stores nothing. The check/compute/populate sequence is
    /// not atomic: concurrent misses for the same key may each run `compute`
    /// and each write the store.
    fn remember<'a, V, F, Fut>(
        &'a self,
        key: &'a str,
        ttl: Duration,
        compute: F,
    ) -> impl Future<Output = Result<V, DomainError>> + Send + 'a
    where
        V: Serialize + DeserializeOwned + Send + Sync + 'a,
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Result<V, DomainError>> + Send + 'a,
    {
        async move {
            if let Some(hit) = self.get::<V>(key).await? {
                tracing::debug!(key = %key, "Cache hit");
                return Ok(hit);
            }

            tracing::debug!(key = %key, "Cache miss, computing value");
            let value = compute().await?;
            self.set(key, &value, ttl).await?;

            Ok(value)
        }
    }
}

// Blanket implementation for all types implementing CacheStore
impl<T: CacheStore + ?Sized> CacheStoreExt for T {}

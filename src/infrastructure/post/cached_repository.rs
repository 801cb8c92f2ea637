//! Cache-aside decorator over any post repository

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::DomainError;
use crate::domain::cache::{CacheStore, CacheStoreExt};
use crate::domain::post::{Post, PostId, PostRepository};

/// Cache policy for [`CachedPostRepository`], fixed at construction
#[derive(Debug, Clone)]
pub struct PostCacheConfig {
    /// How long a cached value stays fresh
    pub ttl: Duration,
    /// Key for the listing; also the prefix for per-post keys
    pub key_prefix: String,
}

impl Default for PostCacheConfig {
    fn default() -> Self {
        Self {
            // 1 day
            ttl: Duration::from_secs(1440 * 60),
            key_prefix: "posts".to_string(),
        }
    }
}

impl PostCacheConfig {
    /// Build a config from a TTL in minutes
    pub fn from_minutes(ttl_minutes: u64, key_prefix: impl Into<String>) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_minutes * 60),
            key_prefix: key_prefix.into(),
        }
    }
}

/// Repository decorator that serves reads from a time-bounded cache
///
/// Wraps any [`PostRepository`] and checks the cache store before each read;
/// on miss the wrapped repository is queried and the result stored under a
/// deterministic key. The check/compute/populate sequence takes no lock:
/// concurrent misses for the same key may each query the wrapped repository
/// and each write the store. Writes are idempotent and values deterministic,
/// so the only cost is duplicate work.
///
/// Never writes to the persistent store, and never caches a NotFound.
#[derive(Debug)]
pub struct CachedPostRepository {
    cache: Arc<dyn CacheStore>,
    inner: Arc<dyn PostRepository>,
    config: PostCacheConfig,
}

impl CachedPostRepository {
    /// Create a decorator with the default policy (24h TTL, "posts" keys)
    pub fn new(cache: Arc<dyn CacheStore>, inner: Arc<dyn PostRepository>) -> Self {
        Self::with_config(cache, inner, PostCacheConfig::default())
    }

    /// Create a decorator with an explicit cache policy
    pub fn with_config(
        cache: Arc<dyn CacheStore>,
        inner: Arc<dyn PostRepository>,
        config: PostCacheConfig,
    ) -> Self {
        Self {
            cache,
            inner,
            config,
        }
    }

    fn list_key(&self) -> String {
        self.config.key_prefix.clone()
    }

    fn post_key(&self, id: PostId) -> String {
        format!("{}{}", self.config.key_prefix, id)
    }
}

#[async_trait]
impl PostRepository for CachedPostRepository {
    async fn get(&self) -> Result<Vec<Post>, DomainError> {
        let key = self.list_key();
        let inner = Arc::clone(&self.inner);

        self.cache
            .remember(&key, self.config.ttl, move || async move {
                inner.get().await
            })
            .await
    }

    async fn find(&self, id: PostId) -> Result<Post, DomainError> {
        let key = self.post_key(id);
        let inner = Arc::clone(&self.inner);

        self.cache
            .remember(&key, self.config.ttl, move || async move {
                inner.find(id).await
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::MockCacheStore;
    use crate::domain::post::{MockPostRepository, PostStatus};
    use crate::infrastructure::cache::InMemoryCacheStore;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Wrapper counting calls that reach the wrapped repository
    #[derive(Debug)]
    struct CountingRepository {
        inner: MockPostRepository,
        get_calls: AtomicUsize,
        find_calls: AtomicUsize,
    }

    impl CountingRepository {
        fn new(inner: MockPostRepository) -> Self {
            Self {
                inner,
                get_calls: AtomicUsize::new(0),
                find_calls: AtomicUsize::new(0),
            }
        }

        fn get_calls(&self) -> usize {
            self.get_calls.load(Ordering::SeqCst)
        }

        fn find_calls(&self) -> usize {
            self.find_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PostRepository for CountingRepository {
        async fn get(&self) -> Result<Vec<Post>, DomainError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get().await
        }

        async fn find(&self, id: PostId) -> Result<Post, DomainError> {
            self.find_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.find(id).await
        }
    }

    fn post(id: i64, status: PostStatus) -> Post {
        Post::new(
            PostId::new(id).unwrap(),
            format!("Post {}", id),
            status,
            "content",
            None,
            match status {
                PostStatus::Published => Some(Utc::now()),
                _ => None,
            },
        )
    }

    async fn seeded_counting_repo(posts: Vec<Post>) -> Arc<CountingRepository> {
        let mock = MockPostRepository::new();
        for p in posts {
            mock.insert(p).await;
        }
        Arc::new(CountingRepository::new(mock))
    }

    #[tokio::test]
    async fn test_get_hits_wrapped_repository_once_per_ttl_window() {
        let counting =
            seeded_counting_repo(vec![post(1, PostStatus::Published), post(2, PostStatus::Draft)])
                .await;
        let cache = Arc::new(MockCacheStore::new());
        let repo = CachedPostRepository::new(cache, counting.clone());

        let first = repo.get().await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(counting.get_calls(), 1);

        let second = repo.get().await.unwrap();
        assert_eq!(second, first);
        assert_eq!(counting.get_calls(), 1);
    }

    #[tokio::test]
    async fn test_get_uses_list_key_and_configured_ttl() {
        let counting = seeded_counting_repo(vec![post(1, PostStatus::Published)]).await;
        let cache = Arc::new(MockCacheStore::new());
        let config = PostCacheConfig::from_minutes(30, "posts");
        let repo = CachedPostRepository::with_config(cache.clone(), counting, config);

        repo.get().await.unwrap();

        assert_eq!(cache.keys(), vec!["posts".to_string()]);
        assert_eq!(
            cache.stored_ttl("posts"),
            Some(Duration::from_secs(30 * 60))
        );
    }

    #[tokio::test]
    async fn test_find_key_is_prefix_plus_decimal_id() {
        let counting = seeded_counting_repo(vec![post(42, PostStatus::Published)]).await;
        let cache = Arc::new(MockCacheStore::new());
        let repo = CachedPostRepository::new(cache.clone(), counting);

        repo.find(PostId::new(42).unwrap()).await.unwrap();

        assert_eq!(cache.keys(), vec!["posts42".to_string()]);
    }

    #[tokio::test]
    async fn test_find_keys_for_distinct_ids_never_collide() {
        let counting =
            seeded_counting_repo(vec![post(1, PostStatus::Published), post(12, PostStatus::Published)])
                .await;
        let cache = Arc::new(MockCacheStore::new());
        let repo = CachedPostRepository::new(cache.clone(), counting);

        repo.find(PostId::new(1).unwrap()).await.unwrap();
        repo.find(PostId::new(12).unwrap()).await.unwrap();

        assert_eq!(
            cache.keys(),
            vec!["posts1".to_string(), "posts12".to_string()]
        );
    }

    #[tokio::test]
    async fn test_find_serves_from_cache_within_window() {
        let counting = seeded_counting_repo(vec![post(7, PostStatus::Published)]).await;
        let cache = Arc::new(MockCacheStore::new());
        let repo = CachedPostRepository::new(cache, counting.clone());

        let first = repo.find(PostId::new(7).unwrap()).await.unwrap();
        let second = repo.find(PostId::new(7).unwrap()).await.unwrap();

        assert_eq!(second, first);
        assert_eq!(counting.find_calls(), 1);
    }

    #[tokio::test]
    async fn test_not_found_is_propagated_and_never_cached() {
        let mock = MockPostRepository::new();
        let counting = Arc::new(CountingRepository::new(mock));
        let cache = Arc::new(MockCacheStore::new());
        let repo = CachedPostRepository::new(cache.clone(), counting.clone());

        let err = repo.find(PostId::new(5).unwrap()).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(!cache.exists("posts5").await.unwrap());

        // The post is written to the store; the next find must see it, not a
        // cached NotFound
        counting.inner.insert(post(5, PostStatus::Published)).await;

        let found = repo.find(PostId::new(5).unwrap()).await.unwrap();
        assert_eq!(found.id().value(), 5);
        assert_eq!(counting.find_calls(), 2);
    }

    #[tokio::test]
    async fn test_get_refreshes_after_ttl_expiry() {
        let counting = seeded_counting_repo(vec![post(1, PostStatus::Published)]).await;
        let cache = Arc::new(InMemoryCacheStore::new());
        let config = PostCacheConfig {
            ttl: Duration::from_millis(50),
            key_prefix: "posts".to_string(),
        };
        let repo = CachedPostRepository::with_config(cache, counting.clone(), config);

        repo.get().await.unwrap();
        assert_eq!(counting.get_calls(), 1);

        tokio::time::sleep(Duration::from_millis(100)).await;

        repo.get().await.unwrap();
        assert_eq!(counting.get_calls(), 2);
    }

    #[tokio::test]
    async fn test_cached_listing_is_identical_to_populated_value() {
        let published = post(1, PostStatus::Published);
        let draft = post(2, PostStatus::Draft);
        let counting = seeded_counting_repo(vec![published.clone(), draft.clone()]).await;
        let cache = Arc::new(MockCacheStore::new());
        let repo = CachedPostRepository::new(cache, counting.clone());

        let first = repo.get().await.unwrap();
        assert_eq!(first, vec![published, draft]);
        assert_eq!(counting.get_calls(), 1);

        let second = repo.get().await.unwrap();
        assert_eq!(second, first);
        assert_eq!(counting.get_calls(), 1);
    }

    #[tokio::test]
    async fn test_storage_error_propagates_and_caches_nothing() {
        let mock = MockPostRepository::new();
        mock.set_should_fail(true).await;
        let counting = Arc::new(CountingRepository::new(mock));
        let cache = Arc::new(MockCacheStore::new());
        let repo = CachedPostRepository::new(cache.clone(), counting);

        let err = repo.get().await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
        assert!(!cache.exists("posts").await.unwrap());
    }

    #[tokio::test]
    async fn test_default_config_is_one_day_in_minutes() {
        let config = PostCacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(1440 * 60));
        assert_eq!(config.key_prefix, "posts");
    }
}

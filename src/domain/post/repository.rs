//! Post repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Post, PostId};
use crate::domain::DomainError;

/// Repository trait for reading posts
///
/// Implemented both by direct storage access and by the caching decorator, so
/// the two are interchangeable wherever a repository is injected.
#[async_trait]
pub trait PostRepository: Send + Sync + Debug {
    /// Get all posts visible to this repository's backing query
    ///
    /// Ordering is storage-defined. Whether unpublished posts appear is a
    /// property of how the implementation scopes its query, not of this
    /// interface.
    async fn get(&self) -> Result<Vec<Post>, DomainError>;

    /// Get a single post by its identifier
    ///
    /// Fails with [`DomainError::NotFound`] when no such post exists.
    async fn find(&self, id: PostId) -> Result<Post, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock post repository for testing
    #[derive(Debug, Default)]
    pub struct MockPostRepository {
        posts: Arc<RwLock<Vec<Post>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockPostRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed the mock with posts
        pub async fn insert(&self, post: Post) {
            self.posts.write().await.push(post);
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PostRepository for MockPostRepository {
        async fn get(&self) -> Result<Vec<Post>, DomainError> {
            self.check_should_fail().await?;
            Ok(self.posts.read().await.clone())
        }

        async fn find(&self, id: PostId) -> Result<Post, DomainError> {
            self.check_should_fail().await?;

            self.posts
                .read()
                .await
                .iter()
                .find(|p| p.id() == id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("Post '{}' not found", id)))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::post::PostStatus;

        fn sample_post(id: i64) -> Post {
            Post::new(
                PostId::new(id).unwrap(),
                format!("Post {}", id),
                PostStatus::Published,
                "content",
                None,
                Some(chrono::Utc::now()),
            )
        }

        #[tokio::test]
        async fn test_get_returns_seeded_posts() {
            let repo = MockPostRepository::new();
            repo.insert(sample_post(1)).await;
            repo.insert(sample_post(2)).await;

            let posts = repo.get().await.unwrap();
            assert_eq!(posts.len(), 2);
        }

        #[tokio::test]
        async fn test_find_returns_matching_post() {
            let repo = MockPostRepository::new();
            repo.insert(sample_post(7)).await;

            let post = repo.find(PostId::new(7).unwrap()).await.unwrap();
            assert_eq!(post.id().value(), 7);
        }

        #[tokio::test]
        async fn test_find_missing_is_not_found() {
            let repo = MockPostRepository::new();

            let err = repo.find(PostId::new(5).unwrap()).await.unwrap_err();
            assert!(err.is_not_found());
        }

        #[tokio::test]
        async fn test_failure_toggle() {
            let repo = MockPostRepository::new();
            repo.set_should_fail(true).await;

            assert!(repo.get().await.is_err());
        }
    }
}

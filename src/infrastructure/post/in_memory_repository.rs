//! In-memory post repository
//!
//! Development fallback when no database is configured, and a fixture for
//! tests. Honors the same scope semantics as the Postgres repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::PostScope;
use crate::domain::DomainError;
use crate::domain::post::{Post, PostId, PostRepository};

/// In-memory implementation of [`PostRepository`]
#[derive(Debug, Clone)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
    scope: PostScope,
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPostRepository {
    /// Create an empty repository returning every post
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
            scope: PostScope::All,
        }
    }

    /// Create an empty repository whose reads carry the published predicate
    pub fn published() -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
            scope: PostScope::Published,
        }
    }

    /// Create a repository with an explicit scope
    pub fn with_scope(scope: PostScope) -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
            scope,
        }
    }

    /// Add a post to the store
    ///
    /// This is the write path sitting outside the repository contract; the
    /// service itself never calls it.
    pub async fn insert(&self, post: Post) {
        self.posts.write().await.push(post);
    }

    fn in_scope(&self, post: &Post) -> bool {
        match self.scope {
            PostScope::All => true,
            PostScope::Published => post.is_published(),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn get(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().await;

        Ok(posts
            .iter()
            .filter(|p| self.in_scope(p))
            .cloned()
            .collect())
    }

    async fn find(&self, id: PostId) -> Result<Post, DomainError> {
        let posts = self.posts.read().await;

        posts
            .iter()
            .find(|p| p.id() == id && self.in_scope(p))
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("Post '{}' not found", id)))
    }
}

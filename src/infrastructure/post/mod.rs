//! Post repository implementations

mod cached_repository;
mod in_memory_repository;
mod postgres_repository;

pub use cached_repository::{CachedPostRepository, PostCacheConfig};
pub use in_memory_repository::InMemoryPostRepository;
pub use postgres_repository::PostgresPostRepository;

/// Scope baked into a repository's backing query
///
/// Filtering is a property of how the query is constructed, not of the
/// `PostRepository` interface itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostScope {
    /// Every row in the store
    All,
    /// Only posts with `published_at <= now`
    #[default]
    Published,
}

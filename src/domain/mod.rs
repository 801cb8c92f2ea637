//! Domain layer - Core entities and contracts

pub mod cache;
pub mod error;
pub mod post;

pub use cache::{CacheStore, CacheStoreExt};
pub use error::DomainError;
pub use post::{Post, PostId, PostRepository, PostStatus};

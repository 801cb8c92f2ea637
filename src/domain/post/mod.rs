//! Post domain - entity and repository contract

mod entity;
mod repository;

pub use entity::{Post, PostId, PostStatus};
pub use repository::PostRepository;

#[cfg(test)]
pub use repository::mock::MockPostRepository;

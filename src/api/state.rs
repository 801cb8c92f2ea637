//! Application state for shared services

use std::sync::Arc;

use crate::domain::post::PostRepository;

/// Application state, shared across handlers via dynamic dispatch
///
/// `posts` is whichever repository implementation was wired at startup: the
/// direct storage one, or the caching decorator around it.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

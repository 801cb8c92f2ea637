//! Wire types for post endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::post::{Post, PostStatus};

/// A post as exposed over HTTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub status: PostStatus,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl PostResponse {
    pub fn from_domain(post: &Post) -> Self {
        Self {
            id: post.id().value(),
            title: post.title().to_string(),
            status: post.status(),
            content: post.content().to_string(),
            image: post.image().map(String::from),
            published_at: post.published_at(),
        }
    }
}

/// Listing envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsResponse {
    pub data: Vec<PostResponse>,
}

impl PostsResponse {
    pub fn new(data: Vec<PostResponse>) -> Self {
        Self { data }
    }
}

//! Post entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Post identifier - a positive integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PostId(i64);

impl PostId {
    /// Create a new PostId after validation
    pub fn new(id: i64) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::invalid_id(format!(
                "post ID must be positive, got {}",
                id
            )));
        }

        Ok(Self(id))
    }

    /// Get the inner integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for PostId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostId> for i64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editorial status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Not yet submitted for publication
    #[default]
    Draft,
    /// Live content
    Published,
    /// Retired content, kept for reference
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::validation(format!(
                "Unknown post status: '{}'. Valid statuses: draft, published, archived",
                other
            ))),
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single content item
///
/// Posts are created and mutated by a write path outside this service; from
/// the perspective of the repositories here they are read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    id: PostId,
    /// Display title
    title: String,
    /// Editorial status
    status: PostStatus,
    /// Body content
    content: String,
    /// Optional image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    /// Publication timestamp; None or a future instant means not yet published
    #[serde(skip_serializing_if = "Option::is_none")]
    published_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with fresh timestamps
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        status: PostStatus,
        content: impl Into<String>,
        image: Option<String>,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            title: title.into(),
            status,
            content: content.into(),
            image,
            published_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruct a post from stored state, timestamps included
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: PostId,
        title: String,
        status: PostStatus,
        content: String,
        image: Option<String>,
        published_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            status,
            content,
            image,
            published_at,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// A post is published once its publication timestamp has passed
    pub fn is_published(&self) -> bool {
        match self.published_at {
            Some(at) => at <= Utc::now(),
            None => false,
        }
    }
}

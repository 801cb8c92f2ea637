//! PostgreSQL post repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::PostScope;
use crate::domain::DomainError;
use crate::domain::post::{Post, PostId, PostRepository, PostStatus};

/// PostgreSQL implementation of [`PostRepository`]
#[derive(Debug, Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
    scope: PostScope,
}

impl PostgresPostRepository {
    /// Create a repository returning every row
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            scope: PostScope::All,
        }
    }

    /// Create a repository whose queries carry the published predicate
    pub fn published(pool: PgPool) -> Self {
        Self {
            pool,
            scope: PostScope::Published,
        }
    }

    /// Create a repository with an explicit scope
    pub fn with_scope(pool: PgPool, scope: PostScope) -> Self {
        Self { pool, scope }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn get(&self) -> Result<Vec<Post>, DomainError> {
        let rows = match self.scope {
            PostScope::All => {
                sqlx::query(
                    r#"
                    SELECT id, title, status, content, image, published_at,
                           created_at, updated_at
                    FROM posts
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
            PostScope::Published => {
                sqlx::query(
                    r#"
                    SELECT id, title, status, content, image, published_at,
                           created_at, updated_at
                    FROM posts
                    WHERE published_at <= NOW()
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::storage(format!("Failed to list posts: {}", e)))?;

        let mut posts = Vec::with_capacity(rows.len());

        for row in rows {
            posts.push(row_to_post(&row)?);
        }

        Ok(posts)
    }

    async fn find(&self, id: PostId) -> Result<Post, DomainError> {
        let row = match self.scope {
            PostScope::All => {
                sqlx::query(
                    r#"
                    SELECT id, title, status, content, image, published_at,
                           created_at, updated_at
                    FROM posts
                    WHERE id = $1
                    "#,
                )
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
            }
            PostScope::Published => {
                sqlx::query(
                    r#"
                    SELECT id, title, status, content, image, published_at,
                           created_at, updated_at
                    FROM posts
                    WHERE id = $1 AND published_at <= NOW()
                    "#,
                )
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::storage(format!("Failed to get post: {}", e)))?;

        match row {
            Some(row) => row_to_post(&row),
            None => Err(DomainError::not_found(format!("Post '{}' not found", id))),
        }
    }
}

fn row_to_post(row: &sqlx::postgres::PgRow) -> Result<Post, DomainError> {
    let id: i64 = row.get("id");
    let title: String = row.get("title");
    let status: String = row.get("status");
    let content: String = row.get("content");
    let image: Option<String> = row.get("image");
    let published_at: Option<chrono::DateTime<chrono::Utc>> = row.get("published_at");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let post_id = PostId::new(id)
        .map_err(|e| DomainError::storage(format!("Invalid post ID in database: {}", e)))?;

    Ok(Post::from_parts(
        post_id,
        title,
        str_to_status(&status),
        content,
        image,
        published_at,
        created_at,
        updated_at,
    ))
}

fn str_to_status(s: &str) -> PostStatus {
    match s {
        "published" => PostStatus::Published,
        "archived" => PostStatus::Archived,
        _ => PostStatus::Draft,
    }
}

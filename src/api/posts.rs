//! Post endpoint handlers

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, PostResponse, PostsResponse};
use crate::domain::post::PostId;

/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<PostsResponse>, ApiError> {
    debug!("Listing posts");

    let posts = state.posts.get().await.map_err(ApiError::from)?;

    let data: Vec<PostResponse> = posts.iter().map(PostResponse::from_domain).collect();

    Ok(Json(PostsResponse::new(data)))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostResponse>, ApiError> {
    debug!(post_id = id, "Getting post");

    let id = PostId::new(id).map_err(ApiError::from)?;
    let post = state.posts.find(id).await.map_err(ApiError::from)?;

    Ok(Json(PostResponse::from_domain(&post)))
}

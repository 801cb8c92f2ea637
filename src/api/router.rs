use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::health;
use super::posts;
use super::state::AppState;

/// Create the router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Content endpoints
        .route("/posts", get(posts::list_posts))
        .route("/posts/{id}", get(posts::get_post))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

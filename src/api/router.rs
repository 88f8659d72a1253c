use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::{groups, users};

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Users
        .route("/users", get(users::list_users))
        .route("/users/query", get(users::query_users))
        .route("/users/{uid}", get(users::get_user))
        .route("/users/{uid}/groups", get(users::get_user_groups))
        // Groups
        .route("/groups", get(groups::list_groups))
        .route("/groups/query", get(groups::query_groups))
        .route("/groups/{gid}", get(groups::get_group))
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Create the main Axum router.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext) -> Router {
    let body_limit = DefaultBodyLimit::max(ctx.max_body_bytes);
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .route("/log/{id}", put(handlers::logs::put_log))
        .route("/logs", get(handlers::logs::get_logs))
        .with_state(state)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

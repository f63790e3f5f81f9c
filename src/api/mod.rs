//! HTTP API module
//!
//! This module renders the served holder as JSON views and exposes the
//! preview canvas for every lifecycle state.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/feed", get(feed_handler))
        .route("/feed/load", post(load_handler))
        .route("/previews", get(previews_handler))
        .route("/previews/:state", get(preview_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

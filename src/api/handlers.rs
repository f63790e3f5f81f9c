//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::state::{AppState, LifecycleState, MockStateHolder, RefreshError};
use super::responses::{FeedResponse, FeedView, HealthResponse, PreviewResponse, StatusResponse};

/// Handle GET /feed - Render the served holder
pub async fn feed_handler(State(state): State<Arc<AppState>>) -> Json<FeedResponse> {
    Json(FeedResponse::render(state.feed.as_ref()))
}

/// Handle POST /feed/load - Reload the feed and return the settled view
pub async fn load_handler(State(state): State<Arc<AppState>>) -> (StatusCode, Json<FeedResponse>) {
    match state.refresh().await {
        Ok(snapshot) => {
            info!("Load endpoint called - feed settled in {}", snapshot.state());
            (StatusCode::OK, Json(FeedResponse::from_snapshot(snapshot)))
        }
        Err(e @ RefreshError::AlreadyLoading) => {
            warn!("Load endpoint rejected: {}", e);
            (StatusCode::CONFLICT, Json(FeedResponse::render(state.feed.as_ref())))
        }
        Err(e @ RefreshError::TaskFailed(_)) => {
            error!("Load endpoint failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(FeedResponse::render(state.feed.as_ref())))
        }
    }
}

/// Handle GET /previews - Render every lifecycle state from a mock holder
pub async fn previews_handler() -> Json<Vec<PreviewResponse>> {
    Json(LifecycleState::ALL.into_iter().map(preview).collect())
}

/// Handle GET /previews/:state - Render a single lifecycle state
pub async fn preview_handler(Path(name): Path<String>) -> Result<Json<PreviewResponse>, StatusCode> {
    match name.parse::<LifecycleState>() {
        Ok(target) => Ok(Json(preview(target))),
        Err(e) => {
            warn!("Preview requested for {}", e);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

fn preview(target: LifecycleState) -> PreviewResponse {
    let mock = MockStateHolder::new(target);
    PreviewResponse {
        display_name: target.title().to_string(),
        state: target,
        view: FeedView::render(&mock),
    }
}

/// Handle GET /status - Return current feed and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let snapshot = state.feed.snapshot();
    let (last_load_started, last_load_finished) = state.get_last_load();

    Json(StatusResponse {
        state: snapshot.state(),
        article_count: snapshot.items().len(),
        mode: state.mode,
        refreshing: state.is_refreshing(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_load_started,
        last_load_finished,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

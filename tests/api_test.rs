//! HTTP layer tests driven through the router

use std::{sync::Arc, time::Duration};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use news_feed::{
    api::create_router,
    services::{SimulatedFeed, SimulatedOutcome},
    state::{AppState, FeedMode, LifecycleState, MockStateHolder, StateHolder},
};

fn live_router(outcome: SimulatedOutcome) -> Router {
    let holder = StateHolder::simulated(SimulatedFeed::new(Duration::from_secs(3), outcome));
    let state = AppState::new(Arc::new(holder), FeedMode::Live, 0, "127.0.0.1".to_string());
    create_router(Arc::new(state))
}

fn preview_router(target: LifecycleState) -> Router {
    let state = AppState::new(
        Arc::new(MockStateHolder::new(target)),
        FeedMode::Preview(target),
        0,
        "127.0.0.1".to_string(),
    );
    create_router(Arc::new(state))
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test(start_paused = true)]
async fn feed_starts_in_progress_view() {
    let (status, body) = send(live_router(SimulatedOutcome::Data), "GET", "/feed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "loading");
    assert_eq!(body["view"], "progress");
    assert_eq!(body["message"], "Loading newsfeed");
}

#[tokio::test(start_paused = true)]
async fn load_returns_article_list() {
    let app = live_router(SimulatedOutcome::Data);
    let (status, body) = send(app.clone(), "POST", "/feed/load").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "data");
    assert_eq!(body["view"], "list");
    assert_eq!(body["title"], "News Feed");
    assert_eq!(body["articles"].as_array().unwrap().len(), 5);

    let (_, body) = send(app, "GET", "/feed").await;
    assert_eq!(body["state"], "data");
}

#[tokio::test(start_paused = true)]
async fn failed_load_renders_error_message() {
    let (status, body) = send(live_router(SimulatedOutcome::Error), "POST", "/feed/load").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "error");
    assert_eq!(body["view"], "message");
    assert_eq!(body["message"], "Error fetching data.");
}

#[tokio::test(start_paused = true)]
async fn empty_load_renders_empty_message() {
    let (_, body) = send(live_router(SimulatedOutcome::Empty), "POST", "/feed/load").await;
    assert_eq!(body["state"], "empty");
    assert_eq!(body["message"], "No data available state");
}

#[tokio::test(start_paused = true)]
async fn concurrent_load_is_rejected() {
    let app = live_router(SimulatedOutcome::Data);
    let (first, second) = tokio::join!(send(app.clone(), "POST", "/feed/load"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        send(app.clone(), "POST", "/feed/load").await
    });

    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::CONFLICT);
    assert_eq!(second.1["state"], "loading");
}

#[tokio::test]
async fn previews_cover_every_state_in_order() {
    let (status, body) = send(live_router(SimulatedOutcome::Data), "GET", "/previews").await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    let states: Vec<_> = entries.iter().map(|e| e["state"].as_str().unwrap()).collect();
    assert_eq!(states, ["data", "loading", "empty", "error"]);
    assert_eq!(entries[0]["display_name"], "Data state");
    assert_eq!(entries[0]["articles"].as_array().unwrap().len(), 5);
    assert_eq!(entries[1]["view"], "progress");
}

#[tokio::test]
async fn single_preview_and_unknown_state() {
    let app = live_router(SimulatedOutcome::Data);
    let (status, body) = send(app.clone(), "GET", "/previews/empty").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display_name"], "No data available state.");

    let request = Request::builder().uri("/previews/stale").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preview_mode_ignores_load() {
    let app = preview_router(LifecycleState::Empty);
    let (status, body) = send(app.clone(), "POST", "/feed/load").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "empty");

    let (_, status_body) = send(app, "GET", "/status").await;
    assert_eq!(status_body["mode"], "preview");
    assert_eq!(status_body["pinned_state"], "empty");
    assert_eq!(status_body["article_count"], 0);
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(preview_router(LifecycleState::Data), "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test(start_paused = true)]
async fn abandoned_load_request_still_settles() {
    let app = live_router(SimulatedOutcome::Data);
    let abandoned = tokio::time::timeout(
        Duration::from_secs(1),
        send(app.clone(), "POST", "/feed/load"),
    )
    .await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_secs(60)).await;
    let (_, body) = send(app.clone(), "GET", "/feed").await;
    assert_eq!(body["state"], "data");
    assert_eq!(body["articles"].as_array().unwrap().len(), 5);

    let (_, status) = send(app, "GET", "/status").await;
    assert_eq!(status["refreshing"], false);
}

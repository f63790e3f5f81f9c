//! News Feed - serves a lifecycle-state news feed and its previews
//!
//! This is the main entry point for the news-feed application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use news_feed::{
    api::create_router,
    config::Config,
    state::{AppState, FeedMode, LoadableState, MockStateHolder, StateHolder},
    tasks::{auto_refresh_task, initial_load_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("news_feed={},tower_http=info", config.log_level()))
        .init();

    info!("Starting news-feed server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, fetch_delay={}ms, simulate={:?}",
          config.host, config.port, config.fetch_delay_ms, config.simulate);

    // Pick the holder: a mock pinned to one state, or a live one
    let (feed, mode, live) = match config.preview {
        Some(target) => {
            info!("Preview mode: serving fixed {} state", target);
            let mock: Arc<dyn LoadableState> = Arc::new(MockStateHolder::new(target));
            (mock, FeedMode::Preview(target), None)
        }
        None => {
            let holder = Arc::new(StateHolder::simulated(config.feed()));
            let feed: Arc<dyn LoadableState> = holder.clone();
            (feed, FeedMode::Live, Some(holder))
        }
    };

    let state = Arc::new(AppState::new(feed, mode, config.port, config.host.clone()));

    // Load once on startup, then periodically if requested
    tokio::spawn(initial_load_task(Arc::clone(&state)));
    if let Some(period) = config.refresh_period() {
        tokio::spawn(auto_refresh_task(Arc::clone(&state), period));
    }

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /feed             - Render the current feed state");
    info!("  POST /feed/load        - Reload the feed and wait for the result");
    info!("  GET  /previews         - Render every lifecycle state");
    info!("  GET  /previews/:state  - Render one lifecycle state");
    info!("  GET  /status           - Feed and server status");
    info!("  GET  /health           - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            result?;
            info!("Shutdown signal received");
        }
    }

    // No state writes from an in-flight load after this point
    if let Some(holder) = live {
        holder.cancel();
    }

    info!("Server shutdown complete");
    Ok(())
}

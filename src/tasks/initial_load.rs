//! Load the feed once when the server comes up

use std::sync::Arc;
use tracing::{info, warn};

use crate::state::AppState;

/// Background task that performs the first load, like a view appearing
pub async fn initial_load_task(state: Arc<AppState>) {
    info!("Starting initial feed load");

    match state.refresh().await {
        Ok(snapshot) => info!(
            "Initial load finished: state={}, articles={}",
            snapshot.state(),
            snapshot.items().len()
        ),
        Err(e) => warn!("Initial load skipped: {}", e),
    }
}

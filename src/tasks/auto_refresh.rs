//! Periodic feed reload

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::state::AppState;

/// Background task that reloads the feed every `period`.
///
/// Ticks that land while a load is still running are skipped.
pub async fn auto_refresh_task(state: Arc<AppState>, period: Duration) {
    info!("Starting auto-refresh task every {:?}", period);

    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the initial load covers it
    interval.tick().await;

    loop {
        interval.tick().await;

        if let Err(e) = state.refresh().await {
            debug!("Auto-refresh tick skipped: {}", e);
        }
    }
}

//! Application state shared by the HTTP layer and background tasks

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    time::Instant,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info};

use super::{FeedSnapshot, LifecycleState, LoadableState};

/// Which kind of holder the server renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "pinned_state", rename_all = "lowercase")]
pub enum FeedMode {
    /// A real holder fetching from the article source
    Live,
    /// A mock holder pinned to one state
    Preview(LifecycleState),
}

/// Why [`AppState::refresh`] produced no settled snapshot
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshError {
    #[error("a feed load is already in progress")]
    AlreadyLoading,
    #[error("feed load task failed: {0}")]
    TaskFailed(String),
}

/// Main application state: the served holder plus server metadata
pub struct AppState {
    /// The holder every view renders from
    pub feed: Arc<dyn LoadableState>,
    pub mode: FeedMode,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Set while a refresh started through this state is running
    loading: AtomicBool,
    /// Last load tracking
    last_load_started: Mutex<Option<DateTime<Utc>>>,
    last_load_finished: Mutex<Option<DateTime<Utc>>>,
}

/// Clears the in-flight flag when the load task ends, even if it panicked
struct LoadingGuard(Arc<AppState>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.loading.store(false, Ordering::SeqCst);
    }
}

impl AppState {
    pub fn new(feed: Arc<dyn LoadableState>, mode: FeedMode, port: u16, host: String) -> Self {
        Self {
            feed,
            mode,
            start_time: Instant::now(),
            port,
            host,
            loading: AtomicBool::new(false),
            last_load_started: Mutex::new(None),
            last_load_finished: Mutex::new(None),
        }
    }

    /// Run the holder's load unless one started here is still running.
    ///
    /// The load runs on its own task, so dropping the returned future (a
    /// client disconnecting mid-request) does not stop it from settling.
    /// Returns the settled snapshot.
    pub async fn refresh(self: &Arc<Self>) -> Result<FeedSnapshot, RefreshError> {
        if self
            .loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Refresh skipped, load already in progress");
            return Err(RefreshError::AlreadyLoading);
        }
        let guard = LoadingGuard(Arc::clone(self));

        let task = tokio::spawn(async move {
            let state = &guard.0;
            Self::stamp(&state.last_load_started);
            state.feed.load().await;
            Self::stamp(&state.last_load_finished);
            state.feed.snapshot()
        });

        match task.await {
            Ok(snapshot) => {
                info!("Refresh complete: state={}", snapshot.state());
                Ok(snapshot)
            }
            Err(e) => {
                error!("Feed load task failed: {}", e);
                Err(RefreshError::TaskFailed(e.to_string()))
            }
        }
    }

    /// Whether a refresh started through this state is running
    pub fn is_refreshing(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    fn stamp(slot: &Mutex<Option<DateTime<Utc>>>) {
        if let Ok(mut time) = slot.lock() {
            *time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get start and finish times of the last refresh
    pub fn get_last_load(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let started = self.last_load_started.lock().ok().and_then(|t| *t);
        let finished = self.last_load_finished.lock().ok().and_then(|t| *t);
        (started, finished)
    }
}

//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Article, FeedMode, FeedSnapshot, LifecycleState, LoadableState};

/// Navigation title shown above the article list
pub const FEED_TITLE: &str = "News Feed";

/// What a client should draw for the current lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum FeedView {
    /// Article rows under a navigation title
    List { title: String, articles: Vec<Article> },
    /// Progress indicator with a caption
    Progress { message: String },
    /// Static text
    Message { message: String },
}

impl FeedView {
    /// Pick the view branch for whatever holder is behind `feed`
    pub fn render(feed: &dyn LoadableState) -> Self {
        Self::from_snapshot(feed.snapshot())
    }

    pub fn from_snapshot(snapshot: FeedSnapshot) -> Self {
        match snapshot.state() {
            LifecycleState::Data => FeedView::List {
                title: FEED_TITLE.to_string(),
                articles: snapshot.into_items(),
            },
            LifecycleState::Loading => FeedView::Progress {
                message: "Loading newsfeed".to_string(),
            },
            LifecycleState::Empty => FeedView::Message {
                message: "No data available state".to_string(),
            },
            LifecycleState::Error => FeedView::Message {
                message: "Error fetching data.".to_string(),
            },
        }
    }
}

/// A rendered feed tagged with the state it was rendered from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub state: LifecycleState,
    #[serde(flatten)]
    pub view: FeedView,
    pub timestamp: DateTime<Utc>,
}

impl FeedResponse {
    pub fn render(feed: &dyn LoadableState) -> Self {
        Self::from_snapshot(feed.snapshot())
    }

    pub fn from_snapshot(snapshot: FeedSnapshot) -> Self {
        Self {
            state: snapshot.state(),
            view: FeedView::from_snapshot(snapshot),
            timestamp: Utc::now(),
        }
    }
}

/// One entry of the preview canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub display_name: String,
    pub state: LifecycleState,
    #[serde(flatten)]
    pub view: FeedView,
}

/// Server and feed status
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub state: LifecycleState,
    pub article_count: usize,
    #[serde(flatten)]
    pub mode: FeedMode,
    pub refreshing: bool,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_load_started: Option<DateTime<Utc>>,
    pub last_load_finished: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

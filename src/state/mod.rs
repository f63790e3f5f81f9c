//! State management module
//!
//! This module contains the lifecycle state machine, the holders that drive
//! it, and the application state served over HTTP.

pub mod lifecycle;
pub mod article;
pub mod snapshot;
pub mod loadable;
pub mod holder;
pub mod mock_holder;
pub mod app_state;

// Re-export main types
pub use lifecycle::{LifecycleState, UnknownState};
pub use article::Article;
pub use snapshot::FeedSnapshot;
pub use loadable::LoadableState;
pub use holder::StateHolder;
pub use mock_holder::MockStateHolder;
pub use app_state::{AppState, FeedMode, RefreshError};

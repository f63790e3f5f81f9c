//! News Feed - a lifecycle-state view-model with previewable mock states
//!
//! A feed holder moves through `Loading`, `Data`, `Empty` and `Error` as it
//! loads articles. Real and mock holders share the [`LoadableState`] trait, so
//! the rendering layer is written once and can be driven by either.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, LifecycleState, LoadableState, MockStateHolder, StateHolder};
pub use api::create_router;
pub use utils::signals::shutdown_signal;

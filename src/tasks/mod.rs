//! Background tasks module
//!
//! This module contains background tasks that drive the served holder
//! alongside the HTTP server.

pub mod initial_load;
pub mod auto_refresh;

// Re-export main functions
pub use initial_load::initial_load_task;
pub use auto_refresh::auto_refresh_task;

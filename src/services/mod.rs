//! Data source module
//!
//! This module contains the article sources a state holder fetches from.

pub mod feed;

// Re-export main types
pub use feed::{ArticleSource, FetchError, SimulatedFeed, SimulatedOutcome};

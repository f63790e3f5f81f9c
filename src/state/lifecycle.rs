//! Lifecycle state of a loadable feed

use std::{fmt, str::FromStr};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The phase a data-driven view is in. Decides which view branch renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// A fetch is in flight (also the startup default)
    Loading,
    /// The last fetch succeeded with at least one article
    Data,
    /// The last fetch succeeded with zero articles
    Empty,
    /// The last fetch failed
    Error,
}

impl LifecycleState {
    /// Every state, in preview order
    pub const ALL: [LifecycleState; 4] = [
        LifecycleState::Data,
        LifecycleState::Loading,
        LifecycleState::Empty,
        LifecycleState::Error,
    ];

    /// Wire name used in JSON, URL paths and CLI flags
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Loading => "loading",
            LifecycleState::Data => "data",
            LifecycleState::Empty => "empty",
            LifecycleState::Error => "error",
        }
    }

    /// Display name shown above a preview of this state
    pub fn title(&self) -> &'static str {
        match self {
            LifecycleState::Data => "Data state",
            LifecycleState::Loading => "Loading progress state",
            LifecycleState::Empty => "No data available state.",
            LifecycleState::Error => "Error fetching state",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lifecycle state: {0}")]
pub struct UnknownState(pub String);

impl FromStr for LifecycleState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownState(s.to_string()))
    }
}

//! Lifecycle state paired with its article payload

use serde::Serialize;

use super::{Article, LifecycleState};

/// A consistent `(state, items)` pair.
///
/// Items are only ever present in the `Data` state; the constructors below
/// are the only way to build a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedSnapshot {
    state: LifecycleState,
    items: Vec<Article>,
}

impl FeedSnapshot {
    /// Fetch in flight, nothing to show yet
    pub fn loading() -> Self {
        Self {
            state: LifecycleState::Loading,
            items: Vec::new(),
        }
    }

    /// Result of a successful fetch: `Data` when non-empty, `Empty` otherwise
    pub fn fetched(items: Vec<Article>) -> Self {
        let state = if items.is_empty() {
            LifecycleState::Empty
        } else {
            LifecycleState::Data
        };
        Self { state, items }
    }

    /// Result of a failed fetch
    pub fn failed() -> Self {
        Self {
            state: LifecycleState::Error,
            items: Vec::new(),
        }
    }

    /// Deterministic snapshot for a target state, backed by fixture articles
    pub fn fixture(state: LifecycleState) -> Self {
        match state {
            LifecycleState::Data => Self::fetched(Article::fixtures()),
            LifecycleState::Loading => Self::loading(),
            LifecycleState::Empty => Self::fetched(Vec::new()),
            LifecycleState::Error => Self::failed(),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn items(&self) -> &[Article] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Article> {
        self.items
    }
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds_invariant(snapshot: &FeedSnapshot) -> bool {
        match snapshot.state() {
            LifecycleState::Data => !snapshot.items().is_empty(),
            _ => snapshot.items().is_empty(),
        }
    }

    #[test]
    fn fetched_picks_data_or_empty() {
        assert_eq!(FeedSnapshot::fetched(Article::fixtures()).state(), LifecycleState::Data);
        assert_eq!(FeedSnapshot::fetched(Vec::new()).state(), LifecycleState::Empty);
    }

    #[test]
    fn every_constructor_holds_invariant() {
        assert!(holds_invariant(&FeedSnapshot::loading()));
        assert!(holds_invariant(&FeedSnapshot::failed()));
        assert!(holds_invariant(&FeedSnapshot::fetched(Vec::new())));
        assert!(holds_invariant(&FeedSnapshot::fetched(vec![Article::new("one")])));
        for state in LifecycleState::ALL {
            let snapshot = FeedSnapshot::fixture(state);
            assert_eq!(snapshot.state(), state);
            assert!(holds_invariant(&snapshot));
        }
    }
}

//! Fixed-state holder for previews and tests

use async_trait::async_trait;
use tracing::debug;

use super::{Article, FeedSnapshot, LifecycleState, LoadableState};

/// A holder pinned to one lifecycle state.
///
/// Articles are derived once from the target state when the holder is built:
/// the fixture articles for `Data`, nothing otherwise. [`load`](LoadableState::load)
/// intentionally does nothing and returns immediately, so a preview renders the
/// same output every time without waiting on a fetch.
#[derive(Debug, Clone)]
pub struct MockStateHolder {
    snapshot: FeedSnapshot,
}

impl MockStateHolder {
    pub fn new(state: LifecycleState) -> Self {
        Self {
            snapshot: FeedSnapshot::fixture(state),
        }
    }

    /// One mock per lifecycle state, in preview order
    pub fn all() -> Vec<MockStateHolder> {
        LifecycleState::ALL.into_iter().map(Self::new).collect()
    }
}

#[async_trait]
impl LoadableState for MockStateHolder {
    fn state(&self) -> LifecycleState {
        self.snapshot.state()
    }

    fn items(&self) -> Vec<Article> {
        self.snapshot.items().to_vec()
    }

    fn snapshot(&self) -> FeedSnapshot {
        self.snapshot.clone()
    }

    async fn load(&self) {
        debug!("Mock holder load ignored (pinned to {})", self.snapshot.state());
    }
}

//! The capability set a rendering layer is written against

use async_trait::async_trait;

use super::{Article, FeedSnapshot, LifecycleState};

/// Anything that exposes a lifecycle state, its articles, and a way to
/// (re)load them. Real and mock holders both implement this, so consumers
/// render the same code path for either.
#[async_trait]
pub trait LoadableState: Send + Sync {
    /// Current lifecycle state
    fn state(&self) -> LifecycleState;

    /// Current articles; empty unless the state is `Data`
    fn items(&self) -> Vec<Article>;

    /// Run the load lifecycle and return once it has settled
    async fn load(&self);

    /// State and items read together.
    ///
    /// Implementors must take both from one consistent read, so the result
    /// never pairs a state with another load's items.
    fn snapshot(&self) -> FeedSnapshot;
}

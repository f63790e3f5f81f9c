//! Live state holder driven by an article source

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::services::{ArticleSource, SimulatedFeed};
use super::{Article, FeedSnapshot, LifecycleState, LoadableState};

/// Holds the feed's lifecycle state and articles, and moves them through
/// `Loading` to `Data`, `Empty` or `Error` on every [`load`](LoadableState::load).
///
/// Each load takes a generation number. A fetch result is only written if
/// its generation is still the latest, so a superseded or cancelled load
/// never touches state once it resolves. A load whose future is dropped
/// before the fetch resolves puts back the snapshot it replaced.
pub struct StateHolder {
    source: Arc<dyn ArticleSource>,
    /// Current snapshot; every write notifies subscribers
    snapshot_tx: watch::Sender<FeedSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _snapshot_rx: watch::Receiver<FeedSnapshot>,
    generation: AtomicU64,
}

impl StateHolder {
    /// Create a holder in the `Loading` state with no articles
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        let (snapshot_tx, snapshot_rx) = watch::channel(FeedSnapshot::loading());

        Self {
            source,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
            generation: AtomicU64::new(0),
        }
    }

    /// Create a holder backed by a simulated feed
    pub fn simulated(feed: SimulatedFeed) -> Self {
        Self::new(Arc::new(feed))
    }

    /// Watch snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Invalidate any in-flight load. Its result will be dropped.
    pub fn cancel(&self) {
        let cancelled = self.generation.fetch_add(1, Ordering::SeqCst);
        debug!("Cancelled feed loads up to generation {}", cancelled);
    }
}

/// Restores the pre-load snapshot if a load is dropped mid-fetch
struct PendingLoad<'a> {
    holder: &'a StateHolder,
    generation: u64,
    restore: Option<FeedSnapshot>,
}

impl PendingLoad<'_> {
    fn settle(&mut self) {
        self.restore = None;
    }
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        let Some(previous) = self.restore.take() else {
            return;
        };
        let restored = self.holder.snapshot_tx.send_if_modified(|snapshot| {
            if self.holder.generation.load(Ordering::SeqCst) != self.generation {
                return false;
            }
            *snapshot = previous;
            true
        });
        if restored {
            debug!("Load dropped before settling, restored previous snapshot (generation {})", self.generation);
        }
    }
}

impl Default for StateHolder {
    fn default() -> Self {
        Self::simulated(SimulatedFeed::default())
    }
}

impl std::fmt::Debug for StateHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateHolder")
            .field("snapshot", &*self.snapshot_tx.borrow())
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

#[async_trait]
impl LoadableState for StateHolder {
    fn state(&self) -> LifecycleState {
        self.snapshot_tx.borrow().state()
    }

    fn items(&self) -> Vec<Article> {
        self.snapshot_tx.borrow().items().to_vec()
    }

    fn snapshot(&self) -> FeedSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    async fn load(&self) {
        // Taking the generation inside the channel's write lock orders it
        // against the result check below.
        let mut generation = 0;
        let mut previous = FeedSnapshot::loading();
        self.snapshot_tx.send_modify(|snapshot| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            previous = std::mem::replace(snapshot, FeedSnapshot::loading());
        });
        info!("Loading feed (generation {})", generation);

        let mut pending = PendingLoad {
            holder: self,
            generation,
            restore: Some(previous),
        };
        let next = match self.source.fetch().await {
            Ok(articles) => FeedSnapshot::fetched(articles),
            Err(e) => {
                warn!("Feed load failed: {}", e);
                FeedSnapshot::failed()
            }
        };
        pending.settle();
        let state = next.state();
        let count = next.items().len();

        let written = self.snapshot_tx.send_if_modified(|snapshot| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *snapshot = next;
            true
        });

        if written {
            info!("Feed loaded: state={}, articles={}", state, count);
        } else {
            debug!("Discarding result of superseded load (generation {})", generation);
        }
    }
}

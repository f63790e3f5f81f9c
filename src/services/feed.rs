//! Article sources used by the state holder

use std::time::Duration;
use async_trait::async_trait;
use clap::ValueEnum;
use tokio::time::sleep;
use tracing::debug;

use crate::state::Article;

/// Fetch failure. The reason is for logs only; consumers just see `Error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("fetch failed: {0}")]
    FetchFailed(String),
}

/// Where a [`StateHolder`](crate::state::StateHolder) gets its articles from
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Article>, FetchError>;
}

/// What the simulated feed answers with once its delay elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SimulatedOutcome {
    /// The five fixture articles
    Data,
    /// No articles
    Empty,
    /// A fetch failure
    Error,
}

/// Stand-in for a network round trip: waits a fixed delay, then returns a
/// configured outcome
#[derive(Debug, Clone)]
pub struct SimulatedFeed {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl SimulatedFeed {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

    pub fn new(delay: Duration, outcome: SimulatedOutcome) -> Self {
        Self { delay, outcome }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn outcome(&self) -> SimulatedOutcome {
        self.outcome
    }
}

impl Default for SimulatedFeed {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY, SimulatedOutcome::Data)
    }
}

#[async_trait]
impl ArticleSource for SimulatedFeed {
    async fn fetch(&self) -> Result<Vec<Article>, FetchError> {
        debug!("Simulating fetch: delay={:?}, outcome={:?}", self.delay, self.outcome);
        sleep(self.delay).await;

        match self.outcome {
            SimulatedOutcome::Data => Ok(Article::fixtures()),
            SimulatedOutcome::Empty => Ok(Vec::new()),
            SimulatedOutcome::Error => Err(FetchError::FetchFailed(
                "simulated network failure".to_string(),
            )),
        }
    }
}

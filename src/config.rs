//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::{
    services::{SimulatedFeed, SimulatedOutcome},
    state::LifecycleState,
};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "news-feed")]
#[command(about = "Serve a lifecycle-state news feed and its previews over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Simulated network round trip in milliseconds
    #[arg(long, default_value = "3000")]
    pub fetch_delay_ms: u64,

    /// Outcome of the simulated fetch
    #[arg(long, value_enum, default_value = "data")]
    pub simulate: SimulatedOutcome,

    /// Serve a mock holder pinned to this state instead of a live one
    #[arg(long, value_enum)]
    pub preview: Option<LifecycleState>,

    /// Reload the feed every N seconds
    #[arg(long)]
    pub refresh_secs: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Build the simulated article source
    pub fn feed(&self) -> SimulatedFeed {
        SimulatedFeed::new(Duration::from_millis(self.fetch_delay_ms), self.simulate)
    }

    /// Auto-refresh period, if enabled
    pub fn refresh_period(&self) -> Option<Duration> {
        self.refresh_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["news-feed"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:20554");
        assert_eq!(config.feed().delay(), Duration::from_secs(3));
        assert_eq!(config.feed().outcome(), SimulatedOutcome::Data);
        assert_eq!(config.preview, None);
        assert_eq!(config.refresh_period(), None);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn preview_and_simulation_flags() {
        let config = Config::try_parse_from([
            "news-feed",
            "--preview",
            "empty",
            "--simulate",
            "error",
            "--fetch-delay-ms",
            "250",
            "--refresh-secs",
            "30",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.preview, Some(LifecycleState::Empty));
        assert_eq!(config.feed().outcome(), SimulatedOutcome::Error);
        assert_eq!(config.feed().delay(), Duration::from_millis(250));
        assert_eq!(config.refresh_period(), Some(Duration::from_secs(30)));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn zero_refresh_disables_task() {
        let config = Config::try_parse_from(["news-feed", "--refresh-secs", "0"]).unwrap();
        assert_eq!(config.refresh_period(), None);
    }

    #[test]
    fn rejects_unknown_preview_state() {
        assert!(Config::try_parse_from(["news-feed", "--preview", "stale"]).is_err());
    }
}

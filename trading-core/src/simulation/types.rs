// trading-core/src/simulation/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::config::SimulationSettings;

/// What to do when the exit re-fetch does not contain the traded asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingQuotePolicy {
    /// Exit at the entry price, which scores the trade as a loss
    #[default]
    FallbackToEntry,
    /// Fail the run with `MissingExitQuote`
    Abort,
}

/// Lifecycle of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Fetching,
    Signaling,
    Simulating,
    Aggregated,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Idle => "idle",
            RunPhase::Fetching => "fetching",
            RunPhase::Signaling => "signaling",
            RunPhase::Simulating => "simulating",
            RunPhase::Aggregated => "aggregated",
        };
        f.write_str(name)
    }
}

/// Execution settings shared by every trade of a run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub hold_period: Duration,
    pub missing_exit_quote: MissingQuotePolicy,
}

impl SimulationConfig {
    pub fn from_settings(settings: &SimulationSettings) -> Self {
        Self {
            hold_period: settings.hold_period(),
            missing_exit_quote: settings.missing_exit_quote,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hold_period: Duration::from_secs(1),
            missing_exit_quote: MissingQuotePolicy::FallbackToEntry,
        }
    }
}

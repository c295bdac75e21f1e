pub mod clock;
pub mod engine;
pub mod errors;
pub mod executor;
pub mod metrics;
pub mod sma;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{HoldClock, NoDelay, TokioClock};
pub use engine::SimulationRunner;
pub use errors::SimulationError;
pub use executor::TradeSimulator;
pub use metrics::PerformanceEvaluator;
pub use sma::{PriceHistory, SignalGenerator};
pub use types::{MissingQuotePolicy, RunPhase, SimulationConfig};

// trading-core/src/simulation/engine.rs

use futures_util::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, info_span, Instrument};
use trading_common::data::types::{AssetSymbol, SimulatedTrade, SimulationReport};
use uuid::Uuid;

use super::clock::HoldClock;
use super::errors::SimulationError;
use super::executor::TradeSimulator;
use super::metrics::PerformanceEvaluator;
use super::sma::{PriceHistory, SignalGenerator};
use super::types::{RunPhase, SimulationConfig};
use crate::exchange::PriceSource;

/// Drives fetch → signal → simulate rounds and aggregates the outcome.
///
/// History and trades belong to a single run. Use one runner per
/// concurrent simulation.
pub struct SimulationRunner {
    source: Arc<dyn PriceSource>,
    generator: SignalGenerator,
    simulator: TradeSimulator,
    evaluator: PerformanceEvaluator,
    warmup: PriceHistory,
    history: PriceHistory,
    trades: Vec<SimulatedTrade>,
    signals_emitted: usize,
    phase: RunPhase,
}

impl SimulationRunner {
    pub fn new(
        source: Arc<dyn PriceSource>,
        clock: Arc<dyn HoldClock>,
        config: SimulationConfig,
    ) -> Self {
        Self {
            simulator: TradeSimulator::new(Arc::clone(&source), clock, config),
            source,
            generator: SignalGenerator::new(),
            evaluator: PerformanceEvaluator::new(),
            warmup: PriceHistory::new(),
            history: PriceHistory::new(),
            trades: Vec::new(),
            signals_emitted: 0,
            phase: RunPhase::Idle,
        }
    }

    /// Seed the next run with previously observed prices
    pub fn with_warmup(mut self, history: PriceHistory) -> Self {
        self.warmup = history;
        self
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Price history as left by the last run
    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn signals_emitted(&self) -> usize {
        self.signals_emitted
    }

    pub async fn run(
        &mut self,
        assets: &[AssetSymbol],
        iterations: usize,
    ) -> Result<SimulationReport, SimulationError> {
        if assets.is_empty() {
            return Err(SimulationError::Config("No assets configured".to_string()));
        }

        let span = info_span!("simulation", run_id = %Uuid::new_v4());
        self.run_rounds(assets, iterations).instrument(span).await
    }

    async fn run_rounds(
        &mut self,
        assets: &[AssetSymbol],
        iterations: usize,
    ) -> Result<SimulationReport, SimulationError> {
        info!(
            "Starting simulation for {:?} over {} iterations",
            assets.iter().map(AssetSymbol::as_str).collect::<Vec<_>>(),
            iterations
        );

        self.history = std::mem::take(&mut self.warmup);
        self.trades.clear();
        self.signals_emitted = 0;
        self.set_phase(RunPhase::Idle);

        for round in 1..=iterations {
            self.set_phase(RunPhase::Fetching);
            let prices = self.source.fetch(assets).await?;
            debug!("Round {}: {} prices fetched at {}", round, prices.len(), prices.fetched_at);

            self.set_phase(RunPhase::Signaling);
            let signals = self.generator.update(&prices, &mut self.history);
            self.signals_emitted += signals.len();
            info!("Round {}: {} signal(s)", round, signals.len());

            if signals.is_empty() {
                continue;
            }

            // Sibling trades are independent; hold and re-price them together
            self.set_phase(RunPhase::Simulating);
            let simulator = &self.simulator;
            let trades = try_join_all(signals.into_iter().map(|s| simulator.simulate(s))).await?;
            self.trades.extend(trades);
        }

        let performance = self.evaluator.evaluate(&self.trades);
        self.set_phase(RunPhase::Aggregated);

        info!(
            "Simulation completed: {} trades, {} wins, win rate {:.2}",
            performance.total_trades, performance.wins, performance.win_rate
        );

        Ok(SimulationReport {
            trades: self.trades.clone(),
            performance,
        })
    }

    fn set_phase(&mut self, phase: RunPhase) {
        debug!("Simulation phase: {} -> {}", self.phase, phase);
        self.phase = phase;
    }
}

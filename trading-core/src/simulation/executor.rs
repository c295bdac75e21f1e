// trading-core/src/simulation/executor.rs

use std::sync::Arc;
use tracing::{info, warn};
use trading_common::data::types::{Signal, SimulatedTrade};

use super::clock::HoldClock;
use super::errors::SimulationError;
use super::types::{MissingQuotePolicy, SimulationConfig};
use crate::exchange::PriceSource;

/// Paper-executes a signal: hold, re-price, score
pub struct TradeSimulator {
    source: Arc<dyn PriceSource>,
    clock: Arc<dyn HoldClock>,
    config: SimulationConfig,
}

impl TradeSimulator {
    pub fn new(
        source: Arc<dyn PriceSource>,
        clock: Arc<dyn HoldClock>,
        config: SimulationConfig,
    ) -> Self {
        Self {
            source,
            clock,
            config,
        }
    }

    pub async fn simulate(&self, signal: Signal) -> Result<SimulatedTrade, SimulationError> {
        self.clock.hold(self.config.hold_period).await;

        let quote = self
            .source
            .fetch(std::slice::from_ref(&signal.asset))
            .await?;

        let exit_price = match quote.get(&signal.asset) {
            Some(price) => price,
            None => match self.config.missing_exit_quote {
                MissingQuotePolicy::FallbackToEntry => {
                    warn!(
                        "No exit quote for {}, closing at entry price {}",
                        signal.asset, signal.entry_price
                    );
                    signal.entry_price
                }
                MissingQuotePolicy::Abort => {
                    return Err(SimulationError::MissingExitQuote(signal.asset));
                }
            },
        };

        let trade = SimulatedTrade::close(&signal, exit_price);
        info!(
            "Simulated trade: BUY {} @ {} -> {} ({})",
            trade.asset,
            trade.entry_price,
            trade.exit_price,
            if trade.success { "win" } else { "loss" }
        );

        Ok(trade)
    }
}

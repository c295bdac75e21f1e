// trading-core/src/simulation/sma.rs
// Demo trend follower, fixed 5/10 crossover. Not meant for real trading.

use std::collections::{HashMap, VecDeque};
use tracing::debug;
use trading_common::data::types::{AssetSymbol, PriceQuote, Signal, SignalKind};

/// Most recent prices kept per asset
pub const HISTORY_CAPACITY: usize = 20;
pub const SHORT_PERIOD: usize = 5;
pub const LONG_PERIOD: usize = 10;
pub const SIGNAL_CONFIDENCE: f64 = 0.8;

/// Rolling per-asset price window, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    prices: HashMap<AssetSymbol, VecDeque<f64>>,
}

impl PriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `price` and drop the oldest entries beyond capacity
    pub fn push(&mut self, asset: &AssetSymbol, price: f64) -> &VecDeque<f64> {
        let window = self
            .prices
            .entry(asset.clone())
            .or_insert_with(|| VecDeque::with_capacity(HISTORY_CAPACITY + 1));

        window.push_back(price);
        while window.len() > HISTORY_CAPACITY {
            window.pop_front();
        }

        window
    }

    pub fn get(&self, asset: &AssetSymbol) -> Option<&VecDeque<f64>> {
        self.prices.get(asset)
    }

    pub fn len_for(&self, asset: &AssetSymbol) -> usize {
        self.get(asset).map_or(0, VecDeque::len)
    }
}

/// Moving-average crossover signal generator
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalGenerator;

impl SignalGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Fold a fresh quote into `history` and return the buy signals it triggers
    pub fn update(&self, prices: &PriceQuote, history: &mut PriceHistory) -> Vec<Signal> {
        let mut signals = Vec::new();

        for (asset, price) in prices.iter() {
            let window = history.push(asset, price);

            if let Some((short_ma, long_ma)) = Self::calculate_ma(window) {
                debug!(
                    "{}: price={} sma_short={:.4} sma_long={:.4}",
                    asset, price, short_ma, long_ma
                );

                if short_ma > long_ma {
                    signals.push(Signal {
                        asset: asset.clone(),
                        entry_price: price,
                        kind: SignalKind::Buy,
                        confidence: SIGNAL_CONFIDENCE,
                    });
                }
            }
        }

        signals
    }

    /// Short and long averages, `None` until the long window is filled
    fn calculate_ma(window: &VecDeque<f64>) -> Option<(f64, f64)> {
        if window.len() < LONG_PERIOD {
            return None;
        }

        let short_ma = window.iter().rev().take(SHORT_PERIOD).sum::<f64>() / SHORT_PERIOD as f64;
        let long_ma = window.iter().rev().take(LONG_PERIOD).sum::<f64>() / LONG_PERIOD as f64;
        Some((short_ma, long_ma))
    }
}

// Stub collaborators for simulation tests

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;
use trading_common::data::types::{AssetSymbol, PriceQuote};

use super::clock::HoldClock;
use crate::exchange::{ExchangeError, PriceSource};

pub fn symbol(name: &str) -> AssetSymbol {
    AssetSymbol::new(name).unwrap()
}

/// Serves pre-scripted prices, one per asset per fetch.
///
/// An asset whose script is exhausted is left out of the quote.
#[derive(Default)]
pub struct ScriptedSource {
    scripts: Mutex<HashMap<AssetSymbol, VecDeque<f64>>>,
    fail_on_fetch: Mutex<Option<usize>>,
    fetches: Mutex<usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prices(self, asset: &str, prices: &[f64]) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(symbol(asset), prices.iter().copied().collect());
        self
    }

    /// Make the n-th fetch (1-based) fail with a timeout
    pub fn failing_on(self, fetch_number: usize) -> Self {
        *self.fail_on_fetch.lock().unwrap() = Some(fetch_number);
        self
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl PriceSource for ScriptedSource {
    async fn fetch(&self, assets: &[AssetSymbol]) -> Result<PriceQuote, ExchangeError> {
        let fetch_number = {
            let mut fetches = self.fetches.lock().unwrap();
            *fetches += 1;
            *fetches
        };

        if *self.fail_on_fetch.lock().unwrap() == Some(fetch_number) {
            return Err(ExchangeError::Timeout.for_asset(&assets[0]));
        }

        let mut scripts = self.scripts.lock().unwrap();
        let mut quote = PriceQuote::new(Utc::now());
        for asset in assets {
            if let Some(price) = scripts.get_mut(asset).and_then(VecDeque::pop_front) {
                quote.insert(asset.clone(), price)?;
            }
        }
        Ok(quote)
    }
}

/// Records every hold request instead of sleeping
#[derive(Default)]
pub struct RecordingClock {
    holds: Mutex<Vec<Duration>>,
}

impl RecordingClock {
    pub fn holds(&self) -> Vec<Duration> {
        self.holds.lock().unwrap().clone()
    }
}

#[async_trait]
impl HoldClock for RecordingClock {
    async fn hold(&self, period: Duration) {
        self.holds.lock().unwrap().push(period);
    }
}

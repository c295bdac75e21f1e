use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use trading_common::data::types::{AssetSymbol, PriceQuote};
use trading_core::exchange::{ExchangeError, PriceSource};
use trading_core::simulation::{
    MissingQuotePolicy, NoDelay, PriceHistory, RunPhase, SimulationConfig, SimulationRunner,
};

/// Replays one price per fetch for a single asset
struct ReplaySource {
    asset: AssetSymbol,
    prices: Mutex<VecDeque<f64>>,
}

impl ReplaySource {
    fn new(asset: &AssetSymbol, prices: impl IntoIterator<Item = f64>) -> Self {
        Self {
            asset: asset.clone(),
            prices: Mutex::new(prices.into_iter().collect()),
        }
    }
}

#[async_trait]
impl PriceSource for ReplaySource {
    async fn fetch(&self, assets: &[AssetSymbol]) -> Result<PriceQuote, ExchangeError> {
        let mut quote = PriceQuote::new(Utc::now());
        for asset in assets {
            if *asset != self.asset {
                return Err(ExchangeError::InvalidSymbol(asset.to_string()).for_asset(asset));
            }
            let price = self
                .prices
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| ExchangeError::ApiError("replay exhausted".to_string()).for_asset(asset))?;
            quote.insert(asset.clone(), price)?;
        }
        Ok(quote)
    }
}

fn zero_hold() -> SimulationConfig {
    SimulationConfig {
        hold_period: std::time::Duration::ZERO,
        missing_exit_quote: MissingQuotePolicy::FallbackToEntry,
    }
}

#[tokio::test]
async fn test_upward_cross_after_warmup_yields_one_trade() {
    let btc = AssetSymbol::new("BTC").unwrap();

    // 100..=107 were observed earlier; the run sees 108 and 109, the exit sees 110
    let mut warmup = PriceHistory::new();
    for price in 100..=107 {
        warmup.push(&btc, f64::from(price));
    }
    let source = Arc::new(ReplaySource::new(&btc, [108.0, 109.0, 110.0]));

    let mut runner =
        SimulationRunner::new(source, Arc::new(NoDelay), zero_hold()).with_warmup(warmup);
    let report = runner.run(std::slice::from_ref(&btc), 2).await.unwrap();

    assert_eq!(runner.signals_emitted(), 1);
    assert_eq!(report.trades.len(), 1);
    assert_eq!(report.performance.total_trades, 1);
    assert_eq!(report.performance.wins, 1);
    assert_eq!(runner.phase(), RunPhase::Aggregated);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["trades"][0]["asset"], "BTC");
    assert_eq!(json["trades"][0]["entry_price"], 109.0);
    assert_eq!(json["trades"][0]["exit_price"], 110.0);
    assert_eq!(json["performance"]["losses"], 0);
}

#[tokio::test]
async fn test_exhausted_source_aborts_without_partial_report() {
    let btc = AssetSymbol::new("BTC").unwrap();
    let source = Arc::new(ReplaySource::new(&btc, [100.0]));

    let mut runner = SimulationRunner::new(source, Arc::new(NoDelay), zero_hold());
    let err = runner.run(std::slice::from_ref(&btc), 2).await.unwrap_err();

    assert!(err.to_string().contains("Quote unavailable for BTC"));
}

use serde::Deserialize;
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, File};
use std::time::Duration;
use trading_common::data::types::{AssetSymbol, DataError};

use crate::simulation::MissingQuotePolicy;

#[derive(Debug, Clone, Deserialize)]
pub struct PriceSourceSettings {
    pub base_url: String,
    pub quote_currency: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationSettings {
    pub assets: Vec<String>,
    pub iterations: usize,
    /// Stand-in for the notional one minute holding period
    pub hold_millis: u64,
    pub missing_exit_quote: MissingQuotePolicy,
}

impl SimulationSettings {
    pub fn asset_symbols(&self) -> Result<Vec<AssetSymbol>, DataError> {
        self.assets.iter().map(|s| AssetSymbol::new(s)).collect()
    }

    pub fn hold_period(&self) -> Duration {
        Duration::from_millis(self.hold_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub price_source: PriceSourceSettings,
    pub simulation: SimulationSettings,
    pub api: Api,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Self::default_builder()?
            .add_source(File::with_name(&format!("../config/{}", run_mode)).required(false));

        if let Ok(api_url) = std::env::var("PRICE_API_URL") {
            builder = builder.set_override("price_source.base_url", api_url)?;
        }

        if let Ok(assets) = std::env::var("SIMULATION_ASSETS") {
            let assets: Vec<String> = assets
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            builder = builder.set_override("simulation.assets", assets)?;
        }

        if let Ok(port) = std::env::var("API_PORT") {
            builder = builder.set_override("api.port", port)?;
        }

        let s = builder.build()?;
        s.try_deserialize()
    }

    fn default_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("price_source.base_url", "https://api.coinbase.com")?
            .set_default("price_source.quote_currency", "USD")?
            .set_default("price_source.timeout_secs", 10_i64)?
            .set_default("simulation.assets", vec!["BTC", "ETH"])?
            .set_default("simulation.iterations", 2_i64)?
            .set_default("simulation.hold_millis", 1000_i64)?
            .set_default("simulation.missing_exit_quote", "fallback_to_entry")?
            .set_default("api.port", 8080_i64)
    }
}

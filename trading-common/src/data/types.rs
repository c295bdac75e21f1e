// =================================================================
// data/types.rs - Shared data model for signals and simulated trades
// =================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum length accepted for an asset ticker
const MAX_SYMBOL_LEN: usize = 10;

/// Data validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Invalid asset symbol: {0}")]
    InvalidSymbol(String),

    #[error("Invalid price for {asset}: {price}")]
    InvalidPrice { asset: String, price: f64 },
}

/// Ticker of a tradable asset, e.g. "BTC"
///
/// Always upper case ASCII alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetSymbol(String);

impl AssetSymbol {
    pub fn new(symbol: &str) -> Result<Self, DataError> {
        let symbol = symbol.trim();

        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Symbol cannot be empty".to_string()));
        }

        if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DataError::InvalidSymbol(format!(
                "Symbol '{}' contains invalid characters",
                symbol
            )));
        }

        if symbol.len() > MAX_SYMBOL_LEN {
            return Err(DataError::InvalidSymbol(format!(
                "Symbol '{}' has invalid length",
                symbol
            )));
        }

        Ok(Self(symbol.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AssetSymbol {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AssetSymbol {
    type Error = DataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AssetSymbol> for String {
    fn from(symbol: AssetSymbol) -> Self {
        symbol.0
    }
}

/// Parse a comma separated asset list such as "BTC,ETH"
pub fn parse_asset_list(raw: &str) -> Result<Vec<AssetSymbol>, DataError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(AssetSymbol::new)
        .collect()
}

/// Spot prices captured by a single fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub fetched_at: DateTime<Utc>,
    pub prices: BTreeMap<AssetSymbol, f64>,
}

impl PriceQuote {
    pub fn new(fetched_at: DateTime<Utc>) -> Self {
        Self {
            fetched_at,
            prices: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, asset: AssetSymbol, price: f64) -> Result<(), DataError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(DataError::InvalidPrice {
                asset: asset.to_string(),
                price,
            });
        }
        self.prices.insert(asset, price);
        Ok(())
    }

    /// Price for `asset`, `None` when this fetch did not cover it
    pub fn get(&self, asset: &AssetSymbol) -> Option<f64> {
        self.prices.get(asset).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssetSymbol, f64)> {
        self.prices.iter().map(|(asset, price)| (asset, *price))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Direction of a signal. Only buys are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Buy,
}

/// Trading signal raised by the crossover generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub asset: AssetSymbol,
    pub entry_price: f64,
    #[serde(rename = "signal")]
    pub kind: SignalKind,
    pub confidence: f64,
}

/// Outcome of holding one signal for the simulated period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedTrade {
    pub asset: AssetSymbol,
    pub entry_price: f64,
    pub exit_price: f64,
    pub success: bool,
}

impl SimulatedTrade {
    /// Score a trade. Ties count as losses.
    pub fn close(signal: &Signal, exit_price: f64) -> Self {
        Self {
            asset: signal.asset.clone(),
            entry_price: signal.entry_price,
            exit_price,
            success: exit_price > signal.entry_price,
        }
    }
}

/// Win/loss statistics over a run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
}

/// Result surface of one simulation run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationReport {
    pub trades: Vec<SimulatedTrade>,
    pub performance: PerformanceSummary,
}

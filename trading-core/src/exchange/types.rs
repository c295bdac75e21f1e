// =================================================================
// exchange/types.rs - Data Structures
// =================================================================

use serde::Deserialize;

/// Coinbase `GET /v2/prices/{pair}/spot` response body
#[derive(Debug, Deserialize, Clone)]
pub struct CoinbaseSpotResponse {
    pub data: CoinbaseSpotPrice,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CoinbaseSpotPrice {
    /// Base asset, e.g. "BTC"
    #[serde(default)]
    pub base: Option<String>,

    /// Quote currency, e.g. "USD"
    #[serde(default)]
    pub currency: Option<String>,

    /// Spot price
    pub amount: PriceAmount,
}

/// Price field as sent by quote providers: usually a decimal string,
/// occasionally a bare JSON number
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum PriceAmount {
    Text(String),
    Number(f64),
}

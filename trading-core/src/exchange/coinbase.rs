// =================================================================
// exchange/coinbase.rs - Coinbase spot price implementation
// =================================================================

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info};
use trading_common::data::types::{AssetSymbol, PriceQuote};

use super::{
    errors::ExchangeError,
    traits::PriceSource,
    types::CoinbaseSpotResponse,
    utils::{build_currency_pair, parse_price_amount, validate_quote_currency},
};
use crate::config::PriceSourceSettings;

// Constants
const COINBASE_API_URL: &str = "https://api.coinbase.com";
const DEFAULT_QUOTE_CURRENCY: &str = "USD";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Coinbase public spot price client
pub struct CoinbaseSpot {
    api_url: String,
    quote_currency: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl CoinbaseSpot {
    /// Create a client against the public Coinbase API, quoting in USD
    pub fn new() -> Self {
        Self {
            api_url: COINBASE_API_URL.to_string(),
            quote_currency: DEFAULT_QUOTE_CURRENCY.to_string(),
            timeout: REQUEST_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_settings(settings: &PriceSourceSettings) -> Result<Self, ExchangeError> {
        Ok(Self {
            api_url: settings.base_url.trim_end_matches('/').to_string(),
            quote_currency: validate_quote_currency(&settings.quote_currency)?,
            timeout: Duration::from_secs(settings.timeout_secs),
            client: reqwest::Client::new(),
        })
    }

    fn spot_url(&self, asset: &AssetSymbol) -> String {
        format!(
            "{}/v2/prices/{}/spot",
            self.api_url,
            build_currency_pair(asset, &self.quote_currency)
        )
    }

    /// Extract the spot price from a response body
    fn parse_spot_payload(&self, asset: &AssetSymbol, text: &str) -> Result<f64, ExchangeError> {
        let response: CoinbaseSpotResponse = serde_json::from_str(text)?;

        if let Some(base) = &response.data.base {
            if !base.eq_ignore_ascii_case(asset.as_str()) {
                return Err(ExchangeError::ParseError(format!(
                    "Expected price for {}, got {}",
                    asset, base
                )));
            }
        }

        if let Some(currency) = &response.data.currency {
            if !currency.eq_ignore_ascii_case(&self.quote_currency) {
                return Err(ExchangeError::ParseError(format!(
                    "Expected price in {}, got {}",
                    self.quote_currency, currency
                )));
            }
        }

        parse_price_amount(&response.data.amount)
    }

    /// Fetch the current spot price of one asset
    async fn fetch_spot_price(&self, asset: &AssetSymbol) -> Result<f64, ExchangeError> {
        let url = self.spot_url(asset);
        debug!("Fetching spot price from: {}", url);

        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExchangeError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        self.parse_spot_payload(asset, &body)
    }
}

#[async_trait]
impl PriceSource for CoinbaseSpot {
    async fn fetch(&self, assets: &[AssetSymbol]) -> Result<PriceQuote, ExchangeError> {
        if assets.is_empty() {
            return Err(ExchangeError::InvalidSymbol(
                "No symbols provided".to_string(),
            ));
        }

        let mut quote = PriceQuote::new(Utc::now());

        for asset in assets {
            let price = self
                .fetch_spot_price(asset)
                .await
                .map_err(|e| e.for_asset(asset))?;
            quote
                .insert(asset.clone(), price)
                .map_err(|e| ExchangeError::from(e).for_asset(asset))?;
        }

        info!("Fetched {} spot prices from Coinbase", quote.len());
        Ok(quote)
    }
}

impl Default for CoinbaseSpot {
    fn default() -> Self {
        Self::new()
    }
}

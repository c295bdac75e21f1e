// exchange/traits.rs

use super::ExchangeError;
use async_trait::async_trait;
use trading_common::data::types::{AssetSymbol, PriceQuote};

/// Spot price provider consumed by the simulation
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch one spot price per asset.
    ///
    /// Either every requested asset is priced or the call fails; callers
    /// never see a partial quote from a failed fetch.
    async fn fetch(&self, assets: &[AssetSymbol]) -> Result<PriceQuote, ExchangeError>;
}

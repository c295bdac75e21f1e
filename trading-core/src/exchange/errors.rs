// =================================================================
// exchange/errors.rs - Error Types
// =================================================================

use thiserror::Error;
use trading_common::data::types::{AssetSymbol, DataError};

/// Error types for quote provider operations
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Data parsing error: {0}")]
    ParseError(String),

    #[error("Connection timeout")]
    Timeout,

    #[error("Exchange API error: {0}")]
    ApiError(String),

    /// A single asset could not be priced, which fails the whole fetch
    #[error("Quote unavailable for {asset}: {source}")]
    QuoteUnavailable {
        asset: AssetSymbol,
        #[source]
        source: Box<ExchangeError>,
    },
}

impl ExchangeError {
    /// Attach the asset whose quote failed
    pub fn for_asset(self, asset: &AssetSymbol) -> Self {
        match self {
            ExchangeError::QuoteUnavailable { .. } => self,
            other => ExchangeError::QuoteUnavailable {
                asset: asset.clone(),
                source: Box::new(other),
            },
        }
    }

    pub fn is_quote_unavailable(&self) -> bool {
        matches!(self, ExchangeError::QuoteUnavailable { .. })
    }
}

// Convert from common error types
impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        ExchangeError::ParseError(err.to_string())
    }
}

impl From<DataError> for ExchangeError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::InvalidSymbol(msg) => ExchangeError::InvalidSymbol(msg),
            other => ExchangeError::ParseError(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExchangeError::Timeout
        } else if err.is_connect() {
            ExchangeError::NetworkError(err.to_string())
        } else if err.is_decode() {
            ExchangeError::ParseError(err.to_string())
        } else {
            ExchangeError::ApiError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_asset_wraps_once() {
        let btc = AssetSymbol::new("BTC").unwrap();
        let err = ExchangeError::Timeout.for_asset(&btc).for_asset(&btc);

        match &err {
            ExchangeError::QuoteUnavailable { asset, source } => {
                assert_eq!(asset.as_str(), "BTC");
                assert!(matches!(**source, ExchangeError::Timeout));
            }
            other => panic!("Expected QuoteUnavailable, got {:?}", other),
        }
        assert_eq!(err.to_string(), "Quote unavailable for BTC: Connection timeout");
    }
}

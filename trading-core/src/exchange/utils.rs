// =================================================================
// exchange/utils.rs - Utility Functions
// =================================================================

use super::{ExchangeError, PriceAmount};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use trading_common::data::types::AssetSymbol;

/// Convert a provider price field into a positive f64
pub fn parse_price_amount(amount: &PriceAmount) -> Result<f64, ExchangeError> {
    let price = match amount {
        PriceAmount::Text(text) => {
            // Parse as Decimal first so strings like "64123.455" are not mangled
            let decimal = Decimal::from_str(text.trim())
                .map_err(|e| ExchangeError::ParseError(format!("Invalid price '{}': {}", text, e)))?;
            decimal.to_f64().ok_or_else(|| {
                ExchangeError::ParseError(format!("Price '{}' is out of range", text))
            })?
        }
        PriceAmount::Number(value) => *value,
    };

    if !price.is_finite() || price <= 0.0 {
        return Err(ExchangeError::ParseError("Price must be positive".to_string()));
    }

    Ok(price)
}

/// Validate a fiat/quote currency code such as "USD"
pub fn validate_quote_currency(currency: &str) -> Result<String, ExchangeError> {
    let currency = currency.trim().to_uppercase();

    if currency.len() < 3 || currency.len() > 5 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ExchangeError::InvalidSymbol(format!(
            "Quote currency '{}' is invalid",
            currency
        )));
    }

    Ok(currency)
}

/// Build a Coinbase currency pair, e.g. "BTC-USD"
pub fn build_currency_pair(asset: &AssetSymbol, quote_currency: &str) -> String {
    format!("{}-{}", asset, quote_currency)
}

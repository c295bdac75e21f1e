use thiserror::Error;
use trading_common::data::types::{AssetSymbol, DataError};

use crate::exchange::ExchangeError;

/// Simulation layer error types
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No exit quote for {0}")]
    MissingExitQuote(AssetSymbol),
}

impl SimulationError {
    /// Check if a fresh run may succeed without changing configuration
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::Exchange(_) => true,
            SimulationError::MissingExitQuote(_) => true,
            SimulationError::Data(_) => false,
            SimulationError::Config(_) => false,
        }
    }
}

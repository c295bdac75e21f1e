// exchange/mod.rs
pub mod traits;
pub mod types;
pub mod errors;
pub mod coinbase;
pub mod utils;

// Re-export main interfaces for easy access
pub use traits::PriceSource;
pub use types::*;
pub use errors::ExchangeError;
pub use coinbase::CoinbaseSpot;

//! API endpoint implementations

pub mod market;
pub mod trading;
pub mod wallet;

pub use market::{MarketEndpoints, DEFAULT_PAYMENT_MODE};
pub use trading::TradingEndpoints;
pub use wallet::WalletEndpoints;

//! GraphQL API client for the Buycoins cryptocurrency exchange
//!
//! This crate wraps the Buycoins GraphQL API: prices, the P2P market book,
//! limit and market orders, instant buys and sells, balances, deposit
//! accounts and on-chain sends.
//!
//! # Features
//!
//! - **Market**: Buycoins prices, active prices, market book, network fees
//! - **Trading**: Limit orders, market orders, buy, sell
//! - **Wallet**: Balances, deposit accounts, send, receive addresses
//! - **Webhooks**: HMAC-SHA1 signature verification
//!
//! # Authentication
//!
//! Every request carries an HTTP Basic `Authorization` header built from the
//! account's public and secret keys.
//!
//! # Example
//!
//! ```no_run
//! use buycoins_graphql::{BuycoinsClient, Credentials, Cryptocurrency, OrderStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = BuycoinsClient::new(creds)?;
//!
//!     let balances = client.get_balances(Some(Cryptocurrency::Bitcoin)).await?;
//!     println!("Balances: {}", balances);
//!
//!     let open_orders = client.get_orders(Some(OrderStatus::Open)).await?;
//!     println!("Open orders: {}", open_orders);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rate Limiting
//!
//! Each client allows at most 300 requests in any 60 second window. Calls
//! over the limit wait for a slot instead of failing. Clones of a client
//! share one limiter; use `ClientConfig::with_rate_limit` to change it.

pub mod client;
pub mod documents;
pub mod endpoints;
pub mod error;
pub mod rate_limiter;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{BuycoinsClient, ClientConfig, DEFAULT_ENDPOINT};
pub use endpoints::DEFAULT_PAYMENT_MODE;
pub use error::{BuycoinsError, BuycoinsResult};
pub use rate_limiter::{RateLimiter, SharedRateLimiter};
pub use transport::{HttpTransport, MockTransport, Transport, TransportError};

// Re-export auth and shared types
pub use buycoins_auth::{build_header, sign_payload, verify_payload, Credentials, SIGNATURE_HEADER};
pub use buycoins_types::{
    Amount, Cryptocurrency, Decimal, IntoParam, OrderSide, OrderStatus, PriceType,
    RateLimitConfig, ValidationError,
};

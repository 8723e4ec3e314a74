//! Shared types for the Buycoins GraphQL API
//!
//! This crate provides the core type definitions used across the Buycoins SDK.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`OrderSide`], [`Cryptocurrency`], [`OrderStatus`], [`PriceType`] - Closed API domains
//! - [`Amount`] - Strictly positive `BigDecimal` amount
//! - [`IntoParam`] - Typed-or-string parameter coercion
//! - [`ValidationError`] - Rejected parameter values
//! - [`SlidingWindow`], [`RateLimitConfig`] - Client-side rate limiting

pub mod enums;
pub mod error;
pub mod param;
pub mod rate_limit;

// Re-export commonly used types
pub use enums::*;
pub use error::*;
pub use param::*;
pub use rate_limit::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;

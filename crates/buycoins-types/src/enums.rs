//! OrderSide, Cryptocurrency, OrderStatus and PriceType enums
//!
//! These are the closed domains the API accepts. Each enum parses from its
//! wire string and rejects anything else with a [`ValidationError`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Every accepted side
    pub const ALL: [Self; 2] = [Self::Buy, Self::Sell];

    /// Returns the side as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl FromStr for OrderSide {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(ValidationError::invalid("side", other)),
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cryptocurrencies supported by Buycoins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Cryptocurrency {
    /// Bitcoin
    #[default]
    Bitcoin,
    /// Ethereum
    Ethereum,
    /// Litecoin
    Litecoin,
    /// Naira token (NGNT)
    NairaToken,
    /// USD Coin
    UsdCoin,
    /// USD Tether
    UsdTether,
}

impl Cryptocurrency {
    /// Every supported cryptocurrency
    pub const ALL: [Self; 6] = [
        Self::Bitcoin,
        Self::Ethereum,
        Self::Litecoin,
        Self::NairaToken,
        Self::UsdCoin,
        Self::UsdTether,
    ];

    /// Returns the cryptocurrency as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Ethereum => "ethereum",
            Self::Litecoin => "litecoin",
            Self::NairaToken => "naira_token",
            Self::UsdCoin => "usd_coin",
            Self::UsdTether => "usd_tether",
        }
    }
}

impl FromStr for Cryptocurrency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::invalid("cryptocurrency", s))
    }
}

impl fmt::Display for Cryptocurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Orders still on the book
    Open,
    /// Filled orders
    Completed,
}

impl OrderStatus {
    /// Every accepted status
    pub const ALL: [Self; 2] = [Self::Open, Self::Completed];

    /// Returns the status as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "completed" => Ok(Self::Completed),
            other => Err(ValidationError::invalid("status", other)),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a limit order is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    /// Fixed price per coin, requires a static price
    Static,
    /// Tracks the market, requires a dynamic exchange rate
    Dynamic,
}

impl PriceType {
    /// Returns the price type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
        }
    }
}

impl FromStr for PriceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Self::Static),
            "dynamic" => Ok(Self::Dynamic),
            other => Err(ValidationError::invalid("price_type", other)),
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Market data endpoints
//!
//! Prices, the P2P market book and network fee estimates.

use buycoins_types::{Amount, Cryptocurrency, IntoParam, OrderSide, OrderStatus};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::BuycoinsClient;
use crate::documents::{
    BUYCOINS_PRICES, GET_ESTIMATED_NETWORK_FEE, GET_MARKET_BOOK, GET_MARKET_BOOK_BY_STATUS,
    GET_PRICES, GET_PRICES_FOR,
};
use crate::error::BuycoinsResult;
use crate::types::{CryptocurrencyVariables, NetworkFeeVariables, PriceVariables, StatusVariables};

/// Payment mode used when the caller has no preference
pub const DEFAULT_PAYMENT_MODE: &str = "standard";

/// Market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a BuycoinsClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a BuycoinsClient) -> Self {
        Self { client }
    }

    /// Get the Buycoins price for a side, payment mode and cryptocurrency
    ///
    /// # Arguments
    /// * `side` - `buy` or `sell`
    /// * `mode` - Payment mode, usually [`DEFAULT_PAYMENT_MODE`]
    /// * `cryptocurrency` - Coin to price
    #[instrument(skip(self, side, cryptocurrency))]
    pub async fn current_price(
        &self,
        side: impl IntoParam<OrderSide>,
        mode: &str,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        let variables = PriceVariables {
            side: side.into_param("side")?,
            mode,
            cryptocurrency: cryptocurrency.into_param("cryptocurrency")?,
        };
        debug!(side = %variables.side, cryptocurrency = %variables.cryptocurrency, "Fetching Buycoins price");

        self.client.dispatch(&BUYCOINS_PRICES, &variables).await
    }

    /// Get active prices
    ///
    /// # Arguments
    /// * `cryptocurrency` - Restrict to one coin, or `None` for all
    #[instrument(skip(self))]
    pub async fn get_prices(&self, cryptocurrency: Option<Cryptocurrency>) -> BuycoinsResult<Value> {
        debug!("Fetching prices");

        match cryptocurrency {
            Some(cryptocurrency) => {
                self.client
                    .dispatch(&GET_PRICES_FOR, &CryptocurrencyVariables { cryptocurrency })
                    .await
            }
            None => self.client.request(&GET_PRICES, None).await,
        }
    }

    /// Get the P2P market book
    ///
    /// # Arguments
    /// * `status` - Restrict to `open` or `completed` orders, or `None` for all
    #[instrument(skip(self))]
    pub async fn get_market_book(&self, status: Option<OrderStatus>) -> BuycoinsResult<Value> {
        debug!("Fetching market book");

        match status {
            Some(status) => {
                self.client
                    .dispatch(&GET_MARKET_BOOK_BY_STATUS, &StatusVariables { status })
                    .await
            }
            None => self.client.request(&GET_MARKET_BOOK, None).await,
        }
    }

    /// Estimate the on-chain fee for sending `amount`
    #[instrument(skip(self, amount, cryptocurrency))]
    pub async fn get_estimated_network_fee(
        &self,
        amount: impl IntoParam<Amount>,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        let variables = NetworkFeeVariables {
            amount: amount.into_param("amount")?,
            cryptocurrency: cryptocurrency.into_param("cryptocurrency")?,
        };
        debug!(amount = %variables.amount, "Fetching estimated network fee");

        self.client
            .dispatch(&GET_ESTIMATED_NETWORK_FEE, &variables)
            .await
    }
}

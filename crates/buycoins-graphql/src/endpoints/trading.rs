//! Trading endpoints for P2P orders and instant trades

use buycoins_types::{
    Amount, Cryptocurrency, IntoParam, OrderSide, OrderStatus, PriceType, ValidationError,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::BuycoinsClient;
use crate::documents::{
    BUY, GET_ORDERS, GET_ORDERS_BY_STATUS, POST_LIMIT_ORDER, POST_MARKET_ORDER, SELL,
};
use crate::error::BuycoinsResult;
use crate::types::{LimitOrderVariables, MarketOrderVariables, StatusVariables, TradeVariables};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a BuycoinsClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a BuycoinsClient) -> Self {
        Self { client }
    }

    /// Get the account's orders
    ///
    /// # Arguments
    /// * `status` - Restrict to `open` or `completed` orders, or `None` for all
    #[instrument(skip(self))]
    pub async fn get_orders(&self, status: Option<OrderStatus>) -> BuycoinsResult<Value> {
        debug!("Fetching orders");

        match status {
            Some(status) => {
                self.client
                    .dispatch(&GET_ORDERS_BY_STATUS, &StatusVariables { status })
                    .await
            }
            None => self.client.request(&GET_ORDERS, None).await,
        }
    }

    /// Place a limit order on the P2P market
    ///
    /// # Arguments
    /// * `order_side` - `buy` or `sell`
    /// * `coin_amount` - Amount of coin to trade
    /// * `price_type` - `static` or `dynamic`
    /// * `cryptocurrency` - Coin to trade
    /// * `static_price` - Fixed price, required when `price_type` is `static`
    /// * `dynamic_exchange_rate` - Rate, required when `price_type` is `dynamic`
    #[instrument(skip(self, order_side, coin_amount, price_type, cryptocurrency))]
    pub async fn post_limit_order(
        &self,
        order_side: impl IntoParam<OrderSide>,
        coin_amount: impl IntoParam<Amount>,
        price_type: impl IntoParam<PriceType>,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
        static_price: Option<Decimal>,
        dynamic_exchange_rate: Option<Decimal>,
    ) -> BuycoinsResult<Value> {
        let order_side = order_side.into_param("order_side")?;
        let coin_amount = coin_amount.into_param("coin_amount")?;
        let price_type = price_type.into_param("price_type")?;
        let cryptocurrency = cryptocurrency.into_param("cryptocurrency")?;

        match price_type {
            PriceType::Static if static_price.is_none() => {
                return Err(ValidationError::missing("static_price", "price_type is static").into());
            }
            PriceType::Dynamic if dynamic_exchange_rate.is_none() => {
                return Err(
                    ValidationError::missing("dynamic_exchange_rate", "price_type is dynamic")
                        .into(),
                );
            }
            _ => {}
        }

        let variables = LimitOrderVariables {
            order_side,
            coin_amount,
            price_type,
            cryptocurrency,
            static_price: static_price
                .map(|p| p.into_param("static_price"))
                .transpose()?,
            dynamic_exchange_rate: dynamic_exchange_rate
                .map(|r| r.into_param("dynamic_exchange_rate"))
                .transpose()?,
        };
        debug!(
            side = %order_side,
            price_type = %price_type,
            amount = %coin_amount,
            "Posting limit order"
        );

        self.client.dispatch(&POST_LIMIT_ORDER, &variables).await
    }

    /// Place a market order on the P2P market
    #[instrument(skip(self, order_side, coin_amount, cryptocurrency))]
    pub async fn post_market_order(
        &self,
        order_side: impl IntoParam<OrderSide>,
        coin_amount: impl IntoParam<Amount>,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        let variables = MarketOrderVariables {
            order_side: order_side.into_param("order_side")?,
            coin_amount: coin_amount.into_param("coin_amount")?,
            cryptocurrency: cryptocurrency.into_param("cryptocurrency")?,
        };
        debug!(side = %variables.order_side, amount = %variables.coin_amount, "Posting market order");

        self.client.dispatch(&POST_MARKET_ORDER, &variables).await
    }

    /// Buy against an active price
    ///
    /// # Arguments
    /// * `price_id` - ID of a price returned by `get_prices`
    /// * `coin_amount` - Amount of coin to buy
    /// * `cryptocurrency` - Coin to buy
    #[instrument(skip(self, coin_amount, cryptocurrency))]
    pub async fn buy(
        &self,
        price_id: &str,
        coin_amount: impl IntoParam<Amount>,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        let variables = TradeVariables {
            price: price_id,
            coin_amount: coin_amount.into_param("coin_amount")?,
            cryptocurrency: cryptocurrency.into_param("cryptocurrency")?,
        };
        debug!(amount = %variables.coin_amount, "Buying");

        self.client.dispatch(&BUY, &variables).await
    }

    /// Sell against an active price
    #[instrument(skip(self, coin_amount, cryptocurrency))]
    pub async fn sell(
        &self,
        price_id: &str,
        coin_amount: impl IntoParam<Amount>,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        let variables = TradeVariables {
            price: price_id,
            coin_amount: coin_amount.into_param("coin_amount")?,
            cryptocurrency: cryptocurrency.into_param("cryptocurrency")?,
        };
        debug!(amount = %variables.coin_amount, "Selling");

        self.client.dispatch(&SELL, &variables).await
    }
}

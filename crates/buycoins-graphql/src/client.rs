//! Main Buycoins client implementation

use std::sync::Arc;
use std::time::Duration;

use buycoins_auth::Credentials;
use buycoins_types::{Amount, Cryptocurrency, IntoParam, OrderSide, OrderStatus, PriceType, RateLimitConfig};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::documents::Document;
use crate::endpoints::{MarketEndpoints, TradingEndpoints, WalletEndpoints};
use crate::error::{BuycoinsError, BuycoinsResult};
use crate::rate_limiter::{RateLimiter, SharedRateLimiter};
use crate::transport::{HttpTransport, Transport, DEFAULT_TIMEOUT_SECS};
use crate::types::GraphQlRequest;

/// Production GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://backend.buycoins.tech/api";

/// Buycoins GraphQL API client
///
/// Every operation validates its arguments, waits on the client's rate
/// limiter and then executes one GraphQL document.
///
/// # Example
///
/// ```no_run
/// use buycoins_graphql::{BuycoinsClient, Credentials, Cryptocurrency, OrderSide};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = BuycoinsClient::new(creds)?;
///
///     let prices = client.get_prices(Some(Cryptocurrency::Bitcoin)).await?;
///     println!("{}", prices);
///
///     // Wire strings are validated the same way as typed values
///     let quote = client.current_price("sell", "standard", "usd_tether").await?;
///     println!("{}", quote);
///
///     let order = client
///         .post_market_order(OrderSide::Buy, 0.01, Cryptocurrency::Bitcoin)
///         .await?;
///     println!("{}", order);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BuycoinsClient {
    transport: Arc<dyn Transport>,
    credentials: Option<Credentials>,
    rate_limiter: SharedRateLimiter,
}

impl BuycoinsClient {
    /// Create a client for the production endpoint
    pub fn new(credentials: Credentials) -> BuycoinsResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> BuycoinsResult<Self> {
        let transport = HttpTransport::with_timeout(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
            config.user_agent.as_deref(),
        )?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a custom transport
    ///
    /// The endpoint, timeout and user agent in `config` are ignored; the
    /// transport owns them.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        info!(
            endpoint = transport.endpoint(),
            authenticated = config.credentials.is_some(),
            "Created Buycoins client"
        );

        Self {
            transport,
            credentials: config.credentials,
            rate_limiter: Arc::new(RateLimiter::new(config.rate_limit)),
        }
    }

    /// Check if the client has credentials
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// Rate limiter shared by every clone of this client
    pub fn rate_limiter(&self) -> &SharedRateLimiter {
        &self.rate_limiter
    }

    /// Execute a document with raw variables
    ///
    /// Absent variables are sent as an empty object. Waits on the rate
    /// limiter, then calls the transport exactly once and returns the
    /// response `data` unmodified.
    #[instrument(skip(self, document, variables), fields(operation = document.operation))]
    pub async fn request(
        &self,
        document: &Document,
        variables: Option<Map<String, Value>>,
    ) -> BuycoinsResult<Value> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            BuycoinsError::Configuration("API credentials are required".to_string())
        })?;
        let authorization = credentials.authorization()?;
        let request = GraphQlRequest::new(document, variables.unwrap_or_default());

        let waited = self.rate_limiter.acquire().await;
        debug!(waited_ms = waited.as_millis() as u64, "Dispatching GraphQL request");

        let data = self
            .transport
            .execute(&request, authorization.expose_secret())
            .await?;
        Ok(data)
    }

    /// Serialize a variables struct and execute the document
    pub(crate) async fn dispatch<V: Serialize>(
        &self,
        document: &Document,
        variables: &V,
    ) -> BuycoinsResult<Value> {
        let variables = match serde_json::to_value(variables)? {
            Value::Object(map) => map,
            _ => {
                return Err(BuycoinsError::Serialization(serde::ser::Error::custom(
                    "variables must serialize to an object",
                )))
            }
        };
        self.request(document, Some(variables)).await
    }

    // ========================================================================
    // Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get the Buycoins price for a side, payment mode and cryptocurrency
    pub async fn current_price(
        &self,
        side: impl IntoParam<OrderSide>,
        mode: &str,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        self.market().current_price(side, mode, cryptocurrency).await
    }

    /// Get active prices, optionally for one cryptocurrency
    pub async fn get_prices(&self, cryptocurrency: Option<Cryptocurrency>) -> BuycoinsResult<Value> {
        self.market().get_prices(cryptocurrency).await
    }

    /// Get the P2P market book, optionally filtered by status
    pub async fn get_market_book(&self, status: Option<OrderStatus>) -> BuycoinsResult<Value> {
        self.market().get_market_book(status).await
    }

    /// Estimate the network fee for sending an amount
    pub async fn get_estimated_network_fee(
        &self,
        amount: impl IntoParam<Amount>,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        self.market()
            .get_estimated_network_fee(amount, cryptocurrency)
            .await
    }

    // ========================================================================
    // Trading Endpoints
    // ========================================================================

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(self)
    }

    /// Get the account's orders, optionally filtered by status
    pub async fn get_orders(&self, status: Option<OrderStatus>) -> BuycoinsResult<Value> {
        self.trading().get_orders(status).await
    }

    /// Place a limit order
    ///
    /// A `static` price type requires `static_price`; a `dynamic` one
    /// requires `dynamic_exchange_rate`.
    pub async fn post_limit_order(
        &self,
        order_side: impl IntoParam<OrderSide>,
        coin_amount: impl IntoParam<Amount>,
        price_type: impl IntoParam<PriceType>,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
        static_price: Option<Decimal>,
        dynamic_exchange_rate: Option<Decimal>,
    ) -> BuycoinsResult<Value> {
        self.trading()
            .post_limit_order(
                order_side,
                coin_amount,
                price_type,
                cryptocurrency,
                static_price,
                dynamic_exchange_rate,
            )
            .await
    }

    /// Place a market order
    pub async fn post_market_order(
        &self,
        order_side: impl IntoParam<OrderSide>,
        coin_amount: impl IntoParam<Amount>,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        self.trading()
            .post_market_order(order_side, coin_amount, cryptocurrency)
            .await
    }

    /// Buy against an active price
    pub async fn buy(
        &self,
        price_id: &str,
        coin_amount: impl IntoParam<Amount>,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        self.trading().buy(price_id, coin_amount, cryptocurrency).await
    }

    /// Sell against an active price
    pub async fn sell(
        &self,
        price_id: &str,
        coin_amount: impl IntoParam<Amount>,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        self.trading().sell(price_id, coin_amount, cryptocurrency).await
    }

    // ========================================================================
    // Wallet Endpoints
    // ========================================================================

    /// Get wallet endpoints
    pub fn wallet(&self) -> WalletEndpoints<'_> {
        WalletEndpoints::new(self)
    }

    /// Get wallet balances, optionally for one cryptocurrency
    pub async fn get_balances(&self, cryptocurrency: Option<Cryptocurrency>) -> BuycoinsResult<Value> {
        self.wallet().get_balances(cryptocurrency).await
    }

    /// Create a virtual Naira deposit account
    pub async fn create_deposit_account(&self, account_name: &str) -> BuycoinsResult<Value> {
        self.wallet().create_deposit_account(account_name).await
    }

    /// Send coins to an external address
    pub async fn send(
        &self,
        amount: impl IntoParam<Amount>,
        address: &str,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        self.wallet().send(amount, address, cryptocurrency).await
    }

    /// Create an address to receive coins
    pub async fn create_address(
        &self,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        self.wallet().create_address(cryptocurrency).await
    }
}

impl std::fmt::Debug for BuycoinsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuycoinsClient")
            .field("endpoint", &self.endpoint())
            .field("has_credentials", &self.has_credentials())
            .field("rate_limit", &self.rate_limiter.config())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (required for every request)
    pub credentials: Option<Credentials>,
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Client-side rate limit
    pub rate_limit: RateLimitConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            rate_limit: RateLimitConfig::buycoins_defaults(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the GraphQL endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the client-side rate limit
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{GET_BALANCES, GET_PRICES};
    use crate::transport::{MockTransport, TransportError};
    use serde_json::json;

    fn mock_client(credentials: Option<Credentials>) -> (BuycoinsClient, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::new());
        let mut config = ClientConfig::new().with_rate_limit(RateLimitConfig::permissive());
        config.credentials = credentials;
        let client = BuycoinsClient::with_transport(config, transport.clone());
        (client, transport)
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_endpoint("http://localhost:8080/api")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.endpoint, "http://localhost:8080/api");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(config.rate_limit, RateLimitConfig::buycoins_defaults());
    }

    #[test]
    fn test_client_with_config() {
        let creds = Credentials::new("pub", "sec").unwrap();
        let client = BuycoinsClient::new(creds).unwrap();

        assert!(client.has_credentials());
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(client.rate_limiter().config().max_calls, 300);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let creds = Credentials::new("pub", "super_secret").unwrap();
        let (client, _) = mock_client(Some(creds));

        let debug = format!("{:?}", client);
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("super_secret"));
    }

    #[tokio::test]
    async fn test_request_normalizes_absent_variables() {
        let (client, transport) = mock_client(Some(Credentials::new("pub", "sec").unwrap()));
        transport.push_response(json!({"getPrices": []}));

        let data = client.request(&GET_PRICES, None).await.unwrap();

        assert_eq!(data, json!({"getPrices": []}));
        let recorded = transport.last_request().unwrap();
        assert_eq!(recorded.variables, json!({}));
        assert_eq!(recorded.authorization, "Basic cHViOnNlYw==");
    }

    #[tokio::test]
    async fn test_request_without_credentials() {
        let (client, transport) = mock_client(None);

        let err = client.request(&GET_BALANCES, None).await.unwrap_err();
        assert!(matches!(err, BuycoinsError::Configuration(_)));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_is_not_retried() {
        let (client, transport) = mock_client(Some(Credentials::new("pub", "sec").unwrap()));
        transport.push_error(TransportError::Status {
            status: 503,
            body: "unavailable".to_string(),
        });

        let err = client.request(&GET_BALANCES, None).await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_rate_limiter() {
        let (client, _transport) = mock_client(Some(Credentials::new("pub", "sec").unwrap()));
        let clone = client.clone();

        client.request(&GET_PRICES, None).await.unwrap();
        assert!(Arc::ptr_eq(client.rate_limiter(), clone.rate_limiter()));
    }
}

//! Common test utilities and fixtures for integration tests
//!
//! Sample payloads follow the shapes returned by the Buycoins GraphQL API.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Arc;

use buycoins_graphql::documents::{Document, ALL};
use buycoins_graphql::transport::RecordedRequest;
use buycoins_graphql::{BuycoinsClient, ClientConfig, Credentials, MockTransport, RateLimitConfig};
use serde_json::{json, Value};

/// Public key used by every test client
pub const PUBLIC_KEY: &str = "pub";

/// Secret key used by every test client
pub const SECRET_KEY: &str = "sec";

/// `Basic base64("pub:sec")`
pub const EXPECTED_AUTHORIZATION: &str = "Basic cHViOnNlYw==";

/// Sample `getPrices` data
pub fn prices_response() -> Value {
    json!({
        "getPrices": [{
            "id": "QnV5Y29pbnNQcmljZS0zODIwMmY1Ni1kYjQzLTRiNjgtYjQ5ZC1hMjU4YzE1MTA3NGQ=",
            "cryptocurrency": "bitcoin",
            "buyPricePerCoin": "32081.805",
            "sellPricePerCoin": "31768.7835",
            "minBuy": "0.001",
            "maxBuy": "1.88386837",
            "minSell": "0.001",
            "maxSell": "0.64012003",
            "minCoinAmount": "0.001",
            "status": "active",
            "expiresAt": 1610993523
        }]
    })
}

/// Sample `postLimitOrder` data
pub fn limit_order_response() -> Value {
    json!({
        "postLimitOrder": {
            "id": "UG9zdE9yZGVyLTE2ZmI2YjBmLWVlN2QtNDRhYS1hNjEwLTJiMDE0MzZlNDQ0Zg==",
            "cryptocurrency": "bitcoin",
            "coinAmount": "0.01",
            "side": "buy",
            "status": "active",
            "createdAt": 1610993490,
            "pricePerCoin": "123.4",
            "priceType": "static",
            "staticPrice": "123.4",
            "dynamicExchangeRate": null
        }
    })
}

/// Credentials for the test account
pub fn credentials() -> Credentials {
    Credentials::new(PUBLIC_KEY, SECRET_KEY).unwrap()
}

/// Client over a mock transport with a permissive rate limit
pub fn mock_client() -> (BuycoinsClient, Arc<MockTransport>) {
    mock_client_with(ClientConfig::new().with_rate_limit(RateLimitConfig::permissive()))
}

/// Client over a mock transport with the given configuration plus test credentials
pub fn mock_client_with(config: ClientConfig) -> (BuycoinsClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let client = BuycoinsClient::with_transport(
        config.with_credentials(credentials()),
        transport.clone(),
    );
    (client, transport)
}

/// Find the document a recorded request executed
pub fn document_for(request: &RecordedRequest) -> &'static Document {
    ALL.iter()
        .find(|doc| doc.text == request.query)
        .unwrap_or_else(|| panic!("unknown document for {}", request.operation))
}

/// Assert the variables sent match the declared variables of the document
///
/// Sent keys must be a subset of the declared variables and a superset of
/// the non-null ones.
pub fn assert_variables_match(request: &RecordedRequest) {
    let doc = document_for(request);
    let sent: BTreeSet<&str> = request
        .variables
        .as_object()
        .expect("variables must be an object")
        .keys()
        .map(String::as_str)
        .collect();
    let declared: BTreeSet<&str> = doc.variable_names().collect();
    let required: BTreeSet<&str> = doc.required_variables().collect();

    assert!(
        sent.is_subset(&declared),
        "{}: sent {:?}, declared {:?}",
        doc.operation,
        sent,
        declared
    );
    assert!(
        required.is_subset(&sent),
        "{}: sent {:?}, required {:?}",
        doc.operation,
        sent,
        required
    );
}

//! HTTP transport tests against a local mock server

mod common;

use std::sync::Arc;

use buycoins_graphql::{
    BuycoinsClient, BuycoinsError, ClientConfig, Cryptocurrency, HttpTransport, RateLimitConfig,
    TransportError,
};
use common::*;
use httpmock::prelude::*;
use rust_decimal_macros::dec;
use serde_json::json;

fn client_for(server: &MockServer) -> BuycoinsClient {
    let config = ClientConfig::new()
        .with_credentials(credentials())
        .with_endpoint(server.url("/api"))
        .with_timeout(5)
        .with_rate_limit(RateLimitConfig::permissive());
    BuycoinsClient::with_config(config).unwrap()
}

#[tokio::test]
async fn test_posts_query_with_basic_auth() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api")
                .header("authorization", EXPECTED_AUTHORIZATION)
                .header("content-type", "application/json")
                .body_includes("query getPrices($cryptocurrency: Cryptocurrency)")
                .body_includes(r#""variables":{"cryptocurrency":"bitcoin"}"#);
            then.status(200).json_body(json!({"data": prices_response()}));
        })
        .await;

    let client = client_for(&server);
    let data = client
        .get_prices(Some(Cryptocurrency::Bitcoin))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(data, prices_response());
}

#[tokio::test]
async fn test_graphql_errors_payload() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api");
            then.status(200).json_body(json!({
                "data": null,
                "errors": [{
                    "message": "Your balance is insufficient for this withdrawal",
                    "path": ["send"]
                }]
            }));
        })
        .await;

    let client = client_for(&server);
    let err = client
        .send(dec!(1), "1BoatSLRHtKNngkdXEeobR76b53LETtpyT", "bitcoin")
        .await
        .unwrap_err();

    mock.assert_async().await;
    match err {
        BuycoinsError::Transport(TransportError::GraphQl { messages }) => {
            assert_eq!(
                messages,
                vec!["Your balance is insufficient for this withdrawal"]
            );
        }
        other => panic!("Expected GraphQL error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api");
            then.status(500).body("upstream unavailable");
        })
        .await;

    let client = client_for(&server);
    let err = client.get_balances(None).await.unwrap_err();

    mock.assert_async().await;
    assert!(err.is_retryable());
    match err {
        BuycoinsError::Transport(TransportError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_status_is_not_retryable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api");
            then.status(401).body("Unauthorized");
        })
        .await;

    let client = client_for(&server);
    let err = client.get_orders(None).await.unwrap_err();

    assert!(matches!(
        err,
        BuycoinsError::Transport(TransportError::Status { status: 401, .. })
    ));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_custom_transport_endpoint() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .header("user-agent", "buycoins-tests");
            then.status(200)
                .json_body(json!({"data": {"createAddress": {"cryptocurrency": "litecoin"}}}));
        })
        .await;

    let transport = HttpTransport::with_timeout(
        server.url("/graphql"),
        std::time::Duration::from_secs(5),
        Some("buycoins-tests"),
    )
    .unwrap();
    let client = BuycoinsClient::with_transport(
        ClientConfig::new().with_credentials(credentials()),
        Arc::new(transport),
    );

    let data = client.create_address("litecoin").await.unwrap();

    mock.assert_async().await;
    assert_eq!(client.endpoint(), server.url("/graphql"));
    assert_eq!(data["createAddress"]["cryptocurrency"], "litecoin");
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html>maintenance</html>");
        })
        .await;

    let client = client_for(&server);
    let err = client.get_prices(None).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(
        err,
        BuycoinsError::Transport(TransportError::Parse(_))
    ));
    assert!(!err.is_retryable());
}

//! Example: Buycoins market data
//!
//! Fetches active prices, a Buycoins quote, the market book and a network
//! fee estimate.
//!
//! Run with: cargo run --example prices
//!
//! NOTE: Set BUYCOINS_PUBLIC_KEY and BUYCOINS_SECRET_KEY environment variables.
//! Use RUST_LOG=buycoins_graphql=debug to see requests and rate limit waits.

use buycoins_graphql::{
    BuycoinsClient, Credentials, Cryptocurrency, OrderSide, OrderStatus, DEFAULT_PAYMENT_MODE,
};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Buycoins Market Data Example ===\n");

    let client = BuycoinsClient::new(Credentials::from_env()?)?;

    println!("Fetching active prices...");
    match client.get_prices(None).await {
        Ok(data) => {
            for price in data["getPrices"].as_array().into_iter().flatten() {
                println!(
                    "  {:<10} buy {:>14}  sell {:>14}",
                    price["cryptocurrency"].as_str().unwrap_or("?"),
                    price["buyPricePerCoin"].as_str().unwrap_or("-"),
                    price["sellPricePerCoin"].as_str().unwrap_or("-"),
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!("Fetching Buycoins sell quote for USDT...");
    match client
        .current_price(OrderSide::Sell, DEFAULT_PAYMENT_MODE, Cryptocurrency::UsdTether)
        .await
    {
        Ok(data) => println!("  {}", data["buycoinsPrices"]),
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!("Fetching open orders on the market book...");
    match client.get_market_book(Some(OrderStatus::Open)).await {
        Ok(data) => {
            let edges = data["getMarketBook"]["orders"]["edges"]
                .as_array()
                .map(Vec::len)
                .unwrap_or(0);
            println!("  {} open orders", edges);
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!("Estimating network fee for 0.01 BTC...");
    match client
        .get_estimated_network_fee(dec!(0.01), Cryptocurrency::Bitcoin)
        .await
    {
        Ok(data) => println!("  {}", data["getEstimatedNetworkFee"]),
        Err(e) => println!("  Error: {}", e),
    }

    Ok(())
}

//! Example: P2P trading and wallet operations
//!
//! Checks balances, then places a static limit order. Validation failures are
//! shown without sending anything.
//!
//! Run with: cargo run --example place_order
//!
//! NOTE: This places a real order. Set BUYCOINS_PUBLIC_KEY and
//! BUYCOINS_SECRET_KEY environment variables, and BUYCOINS_PLACE_ORDER=1 to
//! actually submit it.

use std::env;

use buycoins_graphql::{
    BuycoinsClient, BuycoinsError, ClientConfig, Credentials, Cryptocurrency, OrderSide,
    PriceType,
};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Buycoins Trading Example ===\n");

    let config = ClientConfig::new()
        .with_credentials(Credentials::from_env()?)
        .with_timeout(15);
    let client = BuycoinsClient::with_config(config)?;

    println!("--- Balances ---\n");
    match client.wallet().get_balances(None).await {
        Ok(data) => {
            for balance in data["getBalances"].as_array().into_iter().flatten() {
                println!(
                    "  {:<10} {}",
                    balance["cryptocurrency"].as_str().unwrap_or("?"),
                    balance["confirmedBalance"].as_str().unwrap_or("0"),
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!("--- Validation ---\n");

    // A static order without a price never reaches the API
    let result = client
        .trading()
        .post_limit_order(
            OrderSide::Buy,
            dec!(0.01),
            PriceType::Static,
            Cryptocurrency::Bitcoin,
            None,
            None,
        )
        .await;
    if let Err(BuycoinsError::Validation(e)) = result {
        println!("  Rejected locally: {}", e);
    }

    // Wire strings are checked too
    if let Err(e) = client.post_market_order("hodl", 0.01, "bitcoin").await {
        println!("  Rejected locally: {}", e);
    }
    println!();

    if env::var("BUYCOINS_PLACE_ORDER").as_deref() != Ok("1") {
        println!("Set BUYCOINS_PLACE_ORDER=1 to submit a limit order.");
        return Ok(());
    }

    println!("--- Limit Order ---\n");
    match client
        .post_limit_order(
            OrderSide::Buy,
            dec!(0.01),
            PriceType::Static,
            Cryptocurrency::Bitcoin,
            Some(dec!(123.4)),
            None,
        )
        .await
    {
        Ok(data) => println!("  Placed: {}", data["postLimitOrder"]),
        Err(e) if e.is_retryable() => println!("  Temporary failure, try again: {}", e),
        Err(e) => println!("  Error: {}", e),
    }

    Ok(())
}

//! Example: authenticated trading operations
//!
//! This example demonstrates how to use the trading API for:
//! - Checking account balances
//! - Listing open orders
//! - Placing and cancelling an order
//!
//! Run with: cargo run --example trading
//!
//! NOTE: Set POLONIEX_API_KEY and POLONIEX_API_SECRET environment variables,
//! or pass the path to a JSON key file as the first argument.

use poloniex_rest::{response, Credentials, PoloniexRestClient};
use rust_decimal_macros::dec;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Poloniex Trading API Example ===\n");

    // Key file path takes precedence over environment variables
    let client = match env::args().nth(1) {
        Some(path) => PoloniexRestClient::from_key_file(path)?,
        None => match Credentials::from_env() {
            Ok(creds) => PoloniexRestClient::with_credentials(creds),
            Err(e) => {
                println!("No credentials: {}", e);
                println!();
                println!("Example:");
                println!("  export POLONIEX_API_KEY='your-api-key'");
                println!("  export POLONIEX_API_SECRET='your-api-secret'");
                return Ok(());
            }
        },
    };

    // Get account balances
    println!("Fetching account balances...");
    match client.return_balances().await {
        Ok(balances) => {
            if let Some(error) = response::error_message(&balances) {
                println!("  API error: {}", error);
            } else if let Some(map) = balances.as_object() {
                for (currency, balance) in map.iter().take(10) {
                    println!("  {}: {}", currency, balance);
                }
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Get open orders across all markets
    println!("Fetching open orders...");
    match client.return_open_orders("all").await {
        Ok(orders) => println!("  {}", orders),
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Place a small limit buy far below market, then cancel it
    println!("Placing limit buy on BTC_ETH...");
    match client.buy("BTC_ETH", dec!(0.001), dec!(1.0)).await {
        Ok(result) => {
            if let Some(error) = response::error_message(&result) {
                println!("  API error: {}", error);
            } else if let Some(order_number) =
                result["orderNumber"].as_str().and_then(|n| n.parse().ok())
            {
                println!("  Placed order {}", order_number);

                println!("Cancelling order {}...", order_number);
                match client.cancel_order("BTC_ETH", order_number).await {
                    Ok(result) => println!("  {}", result),
                    Err(e) => println!("  Error: {}", e),
                }
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    println!("\nDone!");
    Ok(())
}

//! Example: public market data
//!
//! This example demonstrates the unauthenticated endpoints:
//! - Ticker for all markets
//! - Order book for a single market
//! - Recent market trades
//!
//! Run with: cargo run --example market_data

use poloniex_rest::PoloniexRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Poloniex Public Market Data ===\n");

    let client = PoloniexRestClient::new();

    // Ticker for all markets
    println!("Fetching ticker...");
    match client.return_ticker().await {
        Ok(ticker) => {
            if let Some(btc_eth) = ticker.get("BTC_ETH") {
                println!("  BTC_ETH last: {}", btc_eth["last"]);
                println!("  BTC_ETH bid:  {}", btc_eth["highestBid"]);
                println!("  BTC_ETH ask:  {}", btc_eth["lowestAsk"]);
            } else {
                println!("  No BTC_ETH market in ticker");
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Order book, top 10 levels
    println!("Fetching BTC_ETH order book (depth=10)...");
    match client.return_order_book("BTC_ETH", Some(10)).await {
        Ok(book) => {
            println!("  Top Asks:");
            for level in book["asks"].as_array().into_iter().flatten().take(3) {
                println!("    {} x {}", level[0], level[1]);
            }
            println!("  Top Bids:");
            for level in book["bids"].as_array().into_iter().flatten().take(3) {
                println!("    {} x {}", level[0], level[1]);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Recent trades (response is a JSON array)
    println!("Fetching recent BTC_ETH trades...");
    match client
        .market()
        .return_market_trade_history("BTC_ETH", None, None)
        .await
    {
        Ok(trades) => {
            for trade in trades.as_array().into_iter().flatten().take(5) {
                println!("  {} {} at {}", trade["type"], trade["amount"], trade["rate"]);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    println!("\nDone!");
    Ok(())
}

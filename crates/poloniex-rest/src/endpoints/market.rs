//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::error::RestResult;
use crate::transport;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a Client,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    async fn query(&self, command: &str, params: &[(&str, String)]) -> RestResult<Value> {
        transport::public_query(self.client, command, params).await
    }

    /// Get the ticker for all markets
    #[instrument(skip(self))]
    pub async fn return_ticker(&self) -> RestResult<Value> {
        debug!("Fetching ticker for all markets");
        self.query("returnTicker", &[]).await
    }

    /// Get the 24-hour volume for all markets, plus totals for primary currencies
    #[instrument(skip(self))]
    pub async fn return_24h_volume(&self) -> RestResult<Value> {
        debug!("Fetching 24h volume");
        self.query("return24hVolume", &[]).await
    }

    /// Get the order book for a market
    ///
    /// The response carries `asks`, `bids`, an `isFrozen` indicator, and a
    /// `seq` sequence number.
    ///
    /// # Arguments
    /// * `pair` - Currency pair (e.g., "BTC_ETH")
    /// * `depth` - Maximum number of asks/bids (optional)
    #[instrument(skip(self))]
    pub async fn return_order_book(&self, pair: &str, depth: Option<u32>) -> RestResult<Value> {
        let mut params = vec![("currencyPair", pair.to_string())];

        if let Some(depth) = depth {
            params.push(("depth", depth.to_string()));
        }

        debug!("Fetching order book for {}", pair);
        self.query("returnOrderBook", &params).await
    }

    /// Get the past 200 trades for a market, or up to 50,000 trades within a range
    ///
    /// Sent on the wire as `returnTradeHistory`, the name the trading
    /// endpoint also uses for the account trade-history command.
    ///
    /// # Arguments
    /// * `pair` - Currency pair (e.g., "BTC_XMR")
    /// * `start` - Interval start as UNIX timestamp (optional)
    /// * `end` - Interval end as UNIX timestamp (optional)
    #[instrument(skip(self))]
    pub async fn return_market_trade_history(
        &self,
        pair: &str,
        start: Option<u64>,
        end: Option<u64>,
    ) -> RestResult<Value> {
        let mut params = vec![("currencyPair", pair.to_string())];

        if let Some(start) = start {
            params.push(("start", start.to_string()));
        }
        if let Some(end) = end {
            params.push(("end", end.to_string()));
        }

        debug!("Fetching market trade history for {}", pair);
        self.query("returnMarketTradeHistory", &params).await
    }

    /// Get information about listed currencies
    #[instrument(skip(self))]
    pub async fn return_currencies(&self) -> RestResult<Value> {
        debug!("Fetching currency info");
        self.query("returnCurrencies", &[]).await
    }
}

//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::transport;
use poloniex_auth::Credentials;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a Client, credentials: &'a Credentials) -> Self {
        Self { client, credentials }
    }

    async fn query(&self, command: &str, params: &[(&str, String)]) -> RestResult<Value> {
        transport::private_query(self.client, self.credentials, command, params).await
    }

    /// Get all exchange account balances
    ///
    /// Returns a map of currency to available balance, e.g.
    /// `{"BTC": "0.59098578", "LTC": "3.31117268", ...}`.
    #[instrument(skip(self))]
    pub async fn return_balances(&self) -> RestResult<Value> {
        debug!("Fetching account balances");
        self.query("returnBalances", &[]).await
    }

    /// Get all balances including available balance, balance on orders, and
    /// estimated BTC value
    ///
    /// # Arguments
    /// * `account` - "all" to include margin and lending accounts (optional)
    #[instrument(skip(self))]
    pub async fn return_complete_balances(&self, account: Option<&str>) -> RestResult<Value> {
        let mut params = Vec::new();

        if let Some(account) = account {
            params.push(("account", account.to_string()));
        }

        debug!("Fetching complete balances");
        self.query("returnCompleteBalances", &params).await
    }

    /// Get open orders for a market
    ///
    /// # Arguments
    /// * `pair` - "all" or a currency pair (e.g., "BTC_ZEC")
    #[instrument(skip(self))]
    pub async fn return_open_orders(&self, pair: &str) -> RestResult<Value> {
        let params = vec![("currencyPair", pair.to_string())];
        debug!("Fetching open orders for {}", pair);
        self.query("returnOpenOrders", &params).await
    }

    /// Get account trade history for a market
    ///
    /// Returns an array for a single market, or a map of market to array
    /// for `"all"`.
    ///
    /// # Arguments
    /// * `pair` - "all" or a currency pair (e.g., "BTC_XCP")
    #[instrument(skip(self))]
    pub async fn return_trade_history(&self, pair: &str) -> RestResult<Value> {
        let params = vec![("currencyPair", pair.to_string())];
        debug!("Fetching trade history for {}", pair);
        self.query("returnTradeHistory", &params).await
    }

    /// Get all trades involving an order
    ///
    /// # Arguments
    /// * `order_number` - The order number to look up
    #[instrument(skip(self))]
    pub async fn return_order_trades(&self, order_number: u64) -> RestResult<Value> {
        let params = vec![("orderNumber", order_number.to_string())];
        debug!("Fetching trades for order {}", order_number);
        self.query("returnOrderTrades", &params).await
    }

    /// Get current trading fees and trailing 30-day volume in BTC
    ///
    /// The response carries `makerFee`, `takerFee`, `thirtyDayVolume`, and
    /// `nextTier`.
    #[instrument(skip(self))]
    pub async fn return_fee_info(&self) -> RestResult<Value> {
        debug!("Fetching fee info");
        self.query("returnFeeInfo", &[]).await
    }
}

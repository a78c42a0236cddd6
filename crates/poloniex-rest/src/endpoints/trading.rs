//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::transport;
use poloniex_auth::Credentials;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a Client, credentials: &'a Credentials) -> Self {
        Self { client, credentials }
    }

    async fn query(&self, command: &str, params: &[(&str, String)]) -> RestResult<Value> {
        transport::private_query(self.client, self.credentials, command, params).await
    }

    /// Place a buy order in a market
    ///
    /// If successful, the response carries the order number and any trades
    /// immediately resulting from the order.
    ///
    /// # Arguments
    /// * `pair` - Currency pair (e.g., "BTC_ETH")
    /// * `rate` - Buy price
    /// * `amount` - Buy amount
    #[instrument(skip(self))]
    pub async fn buy(&self, pair: &str, rate: Decimal, amount: Decimal) -> RestResult<Value> {
        let params = vec![
            ("currencyPair", pair.to_string()),
            ("rate", rate.to_string()),
            ("amount", amount.to_string()),
        ];

        debug!("Placing buy order for {} {} at {}", amount, pair, rate);
        self.query("buy", &params).await
    }

    /// Place a sell order in a market
    ///
    /// Same parameters and response shape as [`buy`](Self::buy).
    #[instrument(skip(self))]
    pub async fn sell(&self, pair: &str, rate: Decimal, amount: Decimal) -> RestResult<Value> {
        let params = vec![
            ("currencyPair", pair.to_string()),
            ("rate", rate.to_string()),
            ("amount", amount.to_string()),
        ];

        debug!("Placing sell order for {} {} at {}", amount, pair, rate);
        self.query("sell", &params).await
    }

    /// Cancel an order placed in a market
    ///
    /// # Arguments
    /// * `pair` - Currency pair the order was placed in
    /// * `order_number` - The order number to cancel
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, pair: &str, order_number: u64) -> RestResult<Value> {
        let params = vec![
            ("currencyPair", pair.to_string()),
            ("orderNumber", order_number.to_string()),
        ];

        debug!("Cancelling order {}", order_number);
        self.query("cancelOrder", &params).await
    }

    /// Cancel an order and place a new one of the same type in a single
    /// atomic transaction
    ///
    /// # Arguments
    /// * `order_number` - The order to be changed
    /// * `rate` - New order price
    /// * `amount` - New order amount (optional; unchanged when omitted)
    #[instrument(skip(self))]
    pub async fn move_order(
        &self,
        order_number: u64,
        rate: Decimal,
        amount: Option<Decimal>,
    ) -> RestResult<Value> {
        let mut params = vec![
            ("orderNumber", order_number.to_string()),
            ("rate", rate.to_string()),
        ];

        if let Some(amount) = amount {
            params.push(("amount", amount.to_string()));
        }

        debug!("Moving order {} to rate {}", order_number, rate);
        self.query("moveOrder", &params).await
    }
}

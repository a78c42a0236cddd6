//! Margin trading endpoints
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::transport;
use poloniex_auth::Credentials;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

/// Margin trading endpoints
pub struct MarginEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
}

impl<'a> MarginEndpoints<'a> {
    pub fn new(client: &'a Client, credentials: &'a Credentials) -> Self {
        Self { client, credentials }
    }

    async fn query(&self, command: &str, params: &[(&str, String)]) -> RestResult<Value> {
        transport::private_query(self.client, self.credentials, command, params).await
    }

    /// Get current tradable balances for each currency in each market for
    /// which margin trading is enabled
    #[instrument(skip(self))]
    pub async fn return_tradable_balances(&self) -> RestResult<Value> {
        debug!("Fetching tradable balances");
        self.query("returnTradableBalances", &[]).await
    }

    /// Get a summary of the entire margin account
    ///
    /// The response carries `totalValue`, `pl`, `lendingFees`, `netValue`,
    /// `totalBorrowedValue`, and `currentMargin`.
    #[instrument(skip(self))]
    pub async fn return_margin_account_summary(&self) -> RestResult<Value> {
        debug!("Fetching margin account summary");
        self.query("returnMarginAccountSummary", &[]).await
    }

    /// Place a margin buy order in a market
    ///
    /// If successful, the response carries the order number and any trades
    /// immediately resulting from the order.
    ///
    /// # Arguments
    /// * `pair` - Currency pair (e.g., "BTC_ETH")
    /// * `rate` - Buy price
    /// * `amount` - Buy amount
    /// * `lending_rate` - Maximum lending rate to accept (optional)
    #[instrument(skip(self))]
    pub async fn margin_buy(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        lending_rate: Option<Decimal>,
    ) -> RestResult<Value> {
        let mut params = vec![
            ("currencyPair", pair.to_string()),
            ("rate", rate.to_string()),
            ("amount", amount.to_string()),
        ];

        if let Some(lending_rate) = lending_rate {
            params.push(("lendingRate", lending_rate.to_string()));
        }

        debug!("Placing margin buy order for {} {} at {}", amount, pair, rate);
        self.query("marginBuy", &params).await
    }

    /// Place a margin sell order in a market
    ///
    /// Same parameters and response shape as [`margin_buy`](Self::margin_buy).
    #[instrument(skip(self))]
    pub async fn margin_sell(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        lending_rate: Option<Decimal>,
    ) -> RestResult<Value> {
        let mut params = vec![
            ("currencyPair", pair.to_string()),
            ("rate", rate.to_string()),
            ("amount", amount.to_string()),
        ];

        if let Some(lending_rate) = lending_rate {
            params.push(("lendingRate", lending_rate.to_string()));
        }

        debug!("Placing margin sell order for {} {} at {}", amount, pair, rate);
        self.query("marginSell", &params).await
    }

    /// Get information about a margin position
    ///
    /// Pass `"all"` to fetch all margin positions at once. With no position
    /// in the market, `type` is `"none"`. `liquidationPrice` is an estimate;
    /// with no liquidation price the value is -1.
    ///
    /// # Arguments
    /// * `pair` - "all" or a currency pair
    #[instrument(skip(self))]
    pub async fn get_margin_position(&self, pair: &str) -> RestResult<Value> {
        let params = vec![("currencyPair", pair.to_string())];
        debug!("Fetching margin position for {}", pair);
        self.query("getMarginPosition", &params).await
    }

    /// Close a margin position in a market using a market order
    ///
    /// # Arguments
    /// * `pair` - Currency pair of the position to close
    #[instrument(skip(self))]
    pub async fn close_margin_position(&self, pair: &str) -> RestResult<Value> {
        let params = vec![("currencyPair", pair.to_string())];
        debug!("Closing margin position for {}", pair);
        self.query("closeMarginPosition", &params).await
    }
}

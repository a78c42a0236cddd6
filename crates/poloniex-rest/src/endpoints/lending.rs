//! Lending endpoints for loan offers and active loans
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::transport;
use poloniex_auth::Credentials;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

/// Lending endpoints for loan offers and active loans
pub struct LendingEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
}

impl<'a> LendingEndpoints<'a> {
    pub fn new(client: &'a Client, credentials: &'a Credentials) -> Self {
        Self { client, credentials }
    }

    async fn query(&self, command: &str, params: &[(&str, String)]) -> RestResult<Value> {
        transport::private_query(self.client, self.credentials, command, params).await
    }

    /// Create a loan offer for a currency
    ///
    /// # Arguments
    /// * `currency` - Currency to lend
    /// * `amount` - Amount to offer
    /// * `duration` - Offer duration in days
    /// * `auto_renew` - Renew the loan automatically when it closes
    /// * `lending_rate` - Daily lending rate
    #[instrument(skip(self))]
    pub async fn create_loan_offer(
        &self,
        currency: &str,
        amount: Decimal,
        duration: u32,
        auto_renew: bool,
        lending_rate: Decimal,
    ) -> RestResult<Value> {
        let params = vec![
            ("currency", currency.to_string()),
            ("amount", amount.to_string()),
            ("duration", duration.to_string()),
            ("autoRenew", if auto_renew { "1" } else { "0" }.to_string()),
            ("lendingRate", lending_rate.to_string()),
        ];

        debug!("Creating loan offer for {} {}", amount, currency);
        self.query("createLoanOffer", &params).await
    }

    /// Cancel a loan offer
    ///
    /// # Arguments
    /// * `order_number` - The loan offer to cancel
    #[instrument(skip(self))]
    pub async fn cancel_loan_offer(&self, order_number: u64) -> RestResult<Value> {
        let params = vec![("orderNumber", order_number.to_string())];
        debug!("Cancelling loan offer {}", order_number);
        self.query("cancelLoanOffer", &params).await
    }

    /// Get open loan offers for each currency
    #[instrument(skip(self))]
    pub async fn return_open_loan_offers(&self) -> RestResult<Value> {
        debug!("Fetching open loan offers");
        self.query("returnOpenLoanOffers", &[]).await
    }

    /// Get active loans for each currency
    #[instrument(skip(self))]
    pub async fn return_active_loans(&self) -> RestResult<Value> {
        debug!("Fetching active loans");
        self.query("returnActiveLoans", &[]).await
    }

    /// Get lending history within a time range
    ///
    /// # Arguments
    /// * `start` - Interval start as UNIX timestamp
    /// * `end` - Interval end as UNIX timestamp
    /// * `limit` - Maximum number of rows returned (optional)
    #[instrument(skip(self))]
    pub async fn return_lending_history(
        &self,
        start: u64,
        end: u64,
        limit: Option<u32>,
    ) -> RestResult<Value> {
        let mut params = vec![
            ("start", start.to_string()),
            ("end", end.to_string()),
        ];

        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }

        debug!("Fetching lending history");
        self.query("returnLendingHistory", &params).await
    }

    /// Toggle the autoRenew setting on an active loan
    ///
    /// # Arguments
    /// * `order_number` - The active loan to toggle
    #[instrument(skip(self))]
    pub async fn toggle_auto_renew(&self, order_number: u64) -> RestResult<Value> {
        let params = vec![("orderNumber", order_number.to_string())];
        debug!("Toggling auto-renew on loan {}", order_number);
        self.query("toggleAutoRenew", &params).await
    }
}

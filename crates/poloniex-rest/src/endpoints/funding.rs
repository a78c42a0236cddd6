//! Funding endpoints for deposits, withdrawals, and balance transfers
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::transport;
use poloniex_auth::Credentials;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

/// Funding endpoints for deposits, withdrawals, and balance transfers
pub struct FundingEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(client: &'a Client, credentials: &'a Credentials) -> Self {
        Self { client, credentials }
    }

    async fn query(&self, command: &str, params: &[(&str, String)]) -> RestResult<Value> {
        transport::private_query(self.client, self.credentials, command, params).await
    }

    /// Get all account deposit addresses
    #[instrument(skip(self))]
    pub async fn return_deposit_addresses(&self) -> RestResult<Value> {
        debug!("Fetching deposit addresses");
        self.query("returnDepositAddress", &[]).await
    }

    /// Generate a new deposit address for a currency
    ///
    /// The response carries `success` (0 or 1) and `response` (the address).
    ///
    /// # Arguments
    /// * `currency` - Currency to generate an address for
    #[instrument(skip(self))]
    pub async fn generate_new_address(&self, currency: &str) -> RestResult<Value> {
        let params = vec![("currency", currency.to_string())];
        debug!("Generating new deposit address for {}", currency);
        self.query("generateNewAddress", &params).await
    }

    /// Get deposit and withdrawal history within a time range
    ///
    /// # Arguments
    /// * `start` - Interval start as UNIX timestamp
    /// * `end` - Interval end as UNIX timestamp
    #[instrument(skip(self))]
    pub async fn return_deposits_withdrawals(&self, start: u64, end: u64) -> RestResult<Value> {
        let params = vec![
            ("start", start.to_string()),
            ("end", end.to_string()),
        ];

        debug!("Fetching deposit/withdrawal history");
        self.query("returnDepositsWithdrawals", &params).await
    }

    /// Place a withdrawal for a currency, with no email confirmation
    ///
    /// The withdrawal privilege must be enabled for the API key.
    ///
    /// # Arguments
    /// * `currency` - Currency to withdraw
    /// * `amount` - Amount to withdraw
    /// * `address` - Destination address
    #[instrument(skip(self, address))]
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> RestResult<Value> {
        let params = vec![
            ("currency", currency.to_string()),
            ("amount", amount.to_string()),
            ("address", address.to_string()),
        ];

        debug!("Withdrawing {} {}", amount, currency);
        self.query("withdraw", &params).await
    }

    /// Transfer funds between exchange, margin, and lending accounts
    ///
    /// # Arguments
    /// * `currency` - Currency to transfer
    /// * `amount` - Amount to transfer
    /// * `from_account` - Source account (exchange, margin, lending)
    /// * `to_account` - Destination account
    #[instrument(skip(self))]
    pub async fn transfer_balance(
        &self,
        currency: &str,
        amount: Decimal,
        from_account: &str,
        to_account: &str,
    ) -> RestResult<Value> {
        let params = vec![
            ("currency", currency.to_string()),
            ("amount", amount.to_string()),
            ("fromAccount", from_account.to_string()),
            ("toAccount", to_account.to_string()),
        ];

        debug!("Transferring {} {} from {} to {}", amount, currency, from_account, to_account);
        self.query("transferBalance", &params).await
    }
}

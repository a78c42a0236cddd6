//! Main REST client implementation

use crate::command;
use crate::endpoints::{
    AccountEndpoints, FundingEndpoints, LendingEndpoints, MarginEndpoints, MarketEndpoints,
    TradingEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::transport;
use poloniex_auth::Credentials;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Poloniex REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use poloniex_rest::{Credentials, PoloniexRestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = PoloniexRestClient::new();
///     let ticker = client.return_ticker().await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_key_file("poloniex.json")?;
///     let auth_client = PoloniexRestClient::with_credentials(creds);
///     let balances = auth_client.return_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PoloniexRestClient {
    http_client: Client,
    credentials: Option<Credentials>,
}

impl PoloniexRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        let mut config = ClientConfig::default();
        config.credentials = Some(credentials);
        Self::with_config(config)
    }

    /// Create a new client with credentials loaded from a JSON key file
    ///
    /// The file must be a JSON object with string fields `key` and `secret`.
    pub fn from_key_file(path: impl AsRef<Path>) -> RestResult<Self> {
        let credentials = Credentials::from_key_file(path)?;
        Ok(Self::with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("poloniex-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        info!("Created Poloniex REST client");

        Self {
            http_client,
            credentials: config.credentials,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Dispatch a raw API command
    ///
    /// Classifies `command` against the public catalogue and routes it to
    /// the matching endpoint; everything outside the catalogue is signed and
    /// sent to the trading endpoint. This is the escape hatch for commands
    /// without a dedicated wrapper. The response is returned verbatim, shape
    /// unchecked.
    pub async fn api_query(&self, command: &str, params: &[(&str, String)]) -> RestResult<Value> {
        if command::is_public(command) {
            transport::public_query(&self.http_client, command, params).await
        } else {
            let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
            transport::private_query(&self.http_client, creds, command, params).await
        }
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client)
    }

    /// Get the ticker for all markets
    pub async fn return_ticker(&self) -> RestResult<Value> {
        self.market().return_ticker().await
    }

    /// Get the 24-hour volume for all markets
    pub async fn return_24h_volume(&self) -> RestResult<Value> {
        self.market().return_24h_volume().await
    }

    /// Get the order book for a market
    ///
    /// # Arguments
    /// * `pair` - Currency pair (e.g., "BTC_ETH")
    /// * `depth` - Maximum number of asks/bids (optional)
    pub async fn return_order_book(&self, pair: &str, depth: Option<u32>) -> RestResult<Value> {
        self.market().return_order_book(pair, depth).await
    }

    /// Get information about listed currencies
    pub async fn return_currencies(&self) -> RestResult<Value> {
        self.market().return_currencies().await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(AccountEndpoints::new(&self.http_client, creds))
    }

    /// Get all exchange account balances
    pub async fn return_balances(&self) -> RestResult<Value> {
        self.account()?.return_balances().await
    }

    /// Get open orders for a market ("all" for every market)
    pub async fn return_open_orders(&self, pair: &str) -> RestResult<Value> {
        self.account()?.return_open_orders(pair).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(TradingEndpoints::new(&self.http_client, creds))
    }

    /// Place a buy order in a market
    pub async fn buy(&self, pair: &str, rate: Decimal, amount: Decimal) -> RestResult<Value> {
        self.trading()?.buy(pair, rate, amount).await
    }

    /// Place a sell order in a market
    pub async fn sell(&self, pair: &str, rate: Decimal, amount: Decimal) -> RestResult<Value> {
        self.trading()?.sell(pair, rate, amount).await
    }

    /// Cancel an order placed in a market
    pub async fn cancel_order(&self, pair: &str, order_number: u64) -> RestResult<Value> {
        self.trading()?.cancel_order(pair, order_number).await
    }

    // ========================================================================
    // Private Margin Endpoints
    // ========================================================================

    /// Get margin trading endpoints (requires credentials)
    pub fn margin(&self) -> RestResult<MarginEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(MarginEndpoints::new(&self.http_client, creds))
    }

    // ========================================================================
    // Private Lending Endpoints
    // ========================================================================

    /// Get lending endpoints (requires credentials)
    pub fn lending(&self) -> RestResult<LendingEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(LendingEndpoints::new(&self.http_client, creds))
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(FundingEndpoints::new(&self.http_client, creds))
    }
}

impl Default for PoloniexRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PoloniexRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoloniexRestClient")
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = PoloniexRestClient::new();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_client_with_credentials() {
        let client = PoloniexRestClient::with_credentials(Credentials::new("key", "secret"));
        assert!(client.has_credentials());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_private_accessors_require_credentials() {
        let client = PoloniexRestClient::new();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
        assert!(matches!(client.margin(), Err(RestError::AuthRequired)));
        assert!(matches!(client.lending(), Err(RestError::AuthRequired)));
        assert!(matches!(client.funding(), Err(RestError::AuthRequired)));
    }

    #[tokio::test]
    async fn test_private_api_query_requires_credentials() {
        let client = PoloniexRestClient::new();
        let result = client.api_query("returnBalances", &[]).await;
        assert!(matches!(result, Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_from_key_file_missing() {
        let result = PoloniexRestClient::from_key_file("/nonexistent/poloniex.json");
        assert!(matches!(
            result,
            Err(RestError::Auth(poloniex_auth::AuthError::KeyFileRead(_)))
        ));
    }
}

//! REST API client for the Poloniex cryptocurrency exchange
//!
//! This crate provides a complete client for Poloniex's legacy REST API,
//! covering market data, account management, order execution, margin
//! trading, and lending.
//!
//! # Features
//!
//! - **Market Data**: Ticker, 24h volume, order book, trade history, currencies
//! - **Account**: Balances, open orders, trade history, fee info
//! - **Trading**: Place, cancel, and move orders
//! - **Margin**: Margin orders, positions, tradable balances
//! - **Lending**: Loan offers, active loans, lending history
//! - **Funding**: Deposit addresses, deposit/withdrawal history, withdrawals
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each private request carries a
//! millisecond nonce and is signed with HMAC-SHA512 over the URL-encoded
//! body, sent as the `Key` and `Sign` headers.
//!
//! # Responses
//!
//! Poloniex responds with free-form JSON (an object for most commands, an
//! array for trade-history-style commands). The client returns the parsed
//! [`serde_json::Value`] verbatim; an object carrying an `error` field
//! signals an application-level failure that the client does not translate.
//! Use [`response::error_message`] to check for one.
//!
//! # Example
//!
//! ```no_run
//! use poloniex_rest::{Credentials, PoloniexRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = PoloniexRestClient::new();
//!     let ticker = client.return_ticker().await?;
//!     println!("BTC_ETH: {:?}", ticker.get("BTC_ETH"));
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = PoloniexRestClient::with_credentials(creds);
//!     let balances = auth_client.return_balances().await?;
//!     println!("Balances: {}", balances);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod command;
pub mod endpoints;
pub mod error;
pub mod response;

mod transport;

// Re-export main types
pub use client::{ClientConfig, PoloniexRestClient};
pub use error::{RestError, RestResult};
pub use poloniex_auth::{AuthError, Credentials};

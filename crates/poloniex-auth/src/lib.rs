//! Authentication for the Poloniex trading API
//!
//! This crate holds the API credential pair and produces the HMAC-SHA512
//! request signatures required by Poloniex's private endpoints.
//!
//! # Example
//!
//! ```no_run
//! use poloniex_auth::Credentials;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from a JSON key file: {"key": "...", "secret": "..."}
//!     let creds = Credentials::from_key_file("poloniex.json")?;
//!
//!     // Sign a URL-encoded request body
//!     let signature = creds.sign("command=returnBalances&nonce=1616492376594");
//!     println!("Sign: {}", signature);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{Credentials, RequestSigner};
pub use error::{AuthError, AuthResult};

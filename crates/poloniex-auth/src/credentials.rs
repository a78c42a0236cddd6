//! Authentication credentials for the Poloniex API
//!
//! Implements HMAC-SHA512 signing as required by Poloniex's private endpoints.
//!
//! # Security
//!
//! The secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`
//!
//! The secret is only ever used as an HMAC key; it is never transmitted.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use serde::Deserialize;
use sha2::Sha512;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// API credentials for authenticated requests
///
/// The secret is automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (sent in the `Key` header)
    api_key: String,
    /// API secret (HMAC key only, zeroized on drop)
    secret: SecretBox<Vec<u8>>,
}

/// On-disk key file: a JSON object with string fields `key` and `secret`
#[derive(Deserialize)]
struct KeyFile {
    key: String,
    secret: String,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// Both values are opaque strings as issued by the exchange. Empty
    /// strings are accepted; requests signed with them are rejected by the
    /// remote service with an `error` body rather than locally.
    pub fn new(api_key: impl Into<String>, secret: impl AsRef<str>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: SecretBox::new(Box::new(secret.as_ref().as_bytes().to_vec())),
        }
    }

    /// Load credentials from a JSON key file
    ///
    /// The file must be a JSON object with string fields `key` and `secret`:
    ///
    /// ```json
    /// {"key": "your-api-key", "secret": "your-api-secret"}
    /// ```
    pub fn from_key_file(path: impl AsRef<Path>) -> AuthResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let keyfile: KeyFile = serde_json::from_str(&contents)?;
        Ok(Self::new(keyfile.key, keyfile.secret))
    }

    /// Create credentials from environment variables
    ///
    /// Reads `POLONIEX_API_KEY` and `POLONIEX_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("POLONIEX_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("POLONIEX_API_KEY".to_string()))?;
        let secret = std::env::var("POLONIEX_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("POLONIEX_API_SECRET".to_string()))?;

        Ok(Self::new(api_key, secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Generate a nonce for a private request
    ///
    /// Poloniex requires nonces to increase across successive requests from
    /// the same key; the current epoch time in milliseconds satisfies that
    /// for sequential callers. Two near-simultaneous requests can still
    /// collide; serializing private calls is the caller's responsibility.
    pub fn generate_nonce() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64
    }

    /// Sign a request body for Poloniex's trading API
    ///
    /// The signature is `HMAC-SHA512(secret, post_data)` rendered as a
    /// lowercase hex digest, sent in the `Sign` header.
    pub fn sign(&self, post_data: &str) -> String {
        let mut mac = HmacSha512::new_from_slice(self.secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(post_data.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new SecretBox with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Request signer for building authenticated requests
///
/// Captures a single nonce at construction so the signed body and the
/// transmitted body carry the same value.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with a fresh nonce
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            credentials,
            nonce: Credentials::generate_nonce(),
        }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request with the given POST data
    pub fn sign(&self, post_data: &str) -> String {
        self.credentials.sign(post_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_nonce_is_strictly_increasing() {
        let nonce1 = Credentials::generate_nonce();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let nonce2 = Credentials::generate_nonce();
        assert!(nonce2 > nonce1);
    }

    #[test]
    fn test_nonce_is_millisecond_scale() {
        // 2021-01-01 in epoch milliseconds
        assert!(Credentials::generate_nonce() > 1_609_459_200_000);
    }

    #[test]
    fn test_signing_consistency() {
        let creds = Credentials::new("API_KEY", "topsecret");
        let body = "command=returnBalances&nonce=1616492376594";

        let signature = creds.sign(body);
        assert_eq!(signature, creds.sign(body));
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let creds = Credentials::new("API_KEY", "topsecret");
        let signature = creds.sign("command=returnBalances&nonce=1");

        // SHA-512 digest is 64 bytes
        assert_eq!(signature.len(), 128);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_signature_matches_reference() {
        // RFC 4231 test case 2
        let creds = Credentials::new("unused", "Jefe");
        let signature = creds.sign("what do ya do for want of nothing?");

        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_different_secrets_produce_different_signatures() {
        let body = "command=returnBalances&nonce=1";
        let sig1 = Credentials::new("k", "secret1").sign(body);
        let sig2 = Credentials::new("k", "secret2").sign(body);
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_empty_credentials_still_sign() {
        let creds = Credentials::new("", "");
        let signature = creds.sign("command=returnBalances&nonce=1");
        assert_eq!(signature.len(), 128);
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key", "test_secret_value");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_secret_value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_key_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"key": "abc", "secret": "def"}}"#).unwrap();

        let creds = Credentials::from_key_file(file.path()).unwrap();
        assert_eq!(creds.api_key(), "abc");

        let body = "command=returnBalances&nonce=1616492376594";
        assert_eq!(creds.sign(body), Credentials::new("abc", "def").sign(body));
    }

    #[test]
    fn test_key_file_missing() {
        let result = Credentials::from_key_file("/nonexistent/poloniex.json");
        assert!(matches!(result, Err(AuthError::KeyFileRead(_))));
    }

    #[test]
    fn test_key_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = Credentials::from_key_file(file.path());
        assert!(matches!(result, Err(AuthError::KeyFileParse(_))));
    }

    #[test]
    fn test_key_file_missing_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"key": "abc"}}"#).unwrap();

        let result = Credentials::from_key_file(file.path());
        assert!(matches!(result, Err(AuthError::KeyFileParse(_))));
    }

    #[test]
    fn test_request_signer_uses_one_nonce() {
        let creds = Credentials::new("abc", "def");
        let signer = RequestSigner::new(&creds);

        assert_eq!(signer.nonce(), signer.nonce());
        assert_eq!(signer.api_key(), "abc");

        let body = format!("command=returnBalances&nonce={}", signer.nonce());
        assert_eq!(signer.sign(&body), creds.sign(&body));
    }
}

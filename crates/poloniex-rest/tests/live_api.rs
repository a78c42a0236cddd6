//! Live API tests
//!
//! These hit the real Poloniex endpoints and are ignored by default.
//! Run with: cargo test --test live_api -- --ignored

use poloniex_rest::{response, Credentials, PoloniexRestClient};

#[tokio::test]
#[ignore]
async fn public_volume_has_no_error() {
    let client = PoloniexRestClient::new();
    let result = client.return_24h_volume().await.unwrap();

    assert!(result.is_object());
    assert!(!response::is_error(&result));
}

#[tokio::test]
#[ignore]
async fn public_currencies_has_no_error() {
    let client = PoloniexRestClient::new();
    let result = client.return_currencies().await.unwrap();

    assert!(result.is_object());
    assert!(!response::is_error(&result));
}

#[tokio::test]
#[ignore]
async fn private_call_with_empty_credentials_returns_error_field() {
    // The remote rejects a bad signature with an `error` body, not a
    // transport failure; the client must surface it verbatim.
    for (key, secret) in [("", ""), ("123", ""), ("", "123")] {
        let client = PoloniexRestClient::with_credentials(Credentials::new(key, secret));
        let result = client.return_balances().await.unwrap();
        assert!(response::is_error(&result), "key={:?} secret={:?}", key, secret);
    }
}

//! Request formation and dispatch
//!
//! Every endpoint group funnels through the two dispatch functions here.
//! Public commands ride as a query string on the public base URL with no
//! body and no auth headers; private commands are URL-encoded into the POST
//! body, signed, and sent to the trading base URL. Request formation is kept
//! as pure functions so it can be tested without a network.

use crate::command;
use crate::error::{RestError, RestResult};
use poloniex_auth::{Credentials, RequestSigner};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

fn encode_pairs(pairs: &[(&str, String)]) -> RestResult<String> {
    serde_urlencoded::to_string(pairs).map_err(|e| RestError::InvalidParameter(e.to_string()))
}

/// Build the query string for a public command
///
/// Applies the wire-name rewrite before encoding.
pub(crate) fn encode_public(command: &str, params: &[(&str, String)]) -> RestResult<String> {
    let mut pairs: Vec<(&str, String)> =
        vec![("command", command::wire_command(command).to_string())];
    pairs.extend(params.iter().map(|(k, v)| (*k, v.clone())));
    encode_pairs(&pairs)
}

/// Build the body for a private command
///
/// The exact string returned here is both signed and transmitted.
pub(crate) fn encode_private(
    command: &str,
    nonce: u64,
    params: &[(&str, String)],
) -> RestResult<String> {
    let mut pairs: Vec<(&str, String)> = vec![
        ("command", command.to_string()),
        ("nonce", nonce.to_string()),
    ];
    pairs.extend(params.iter().map(|(k, v)| (*k, v.clone())));
    encode_pairs(&pairs)
}

/// POST a public command and parse the response as JSON
pub(crate) async fn public_query(
    client: &Client,
    command: &str,
    params: &[(&str, String)],
) -> RestResult<Value> {
    let query = encode_public(command, params)?;
    let url = format!("{}?{}", command::PUBLIC_BASE_URL, query);

    debug!(command, "Dispatching public command");

    let response = client.post(&url).send().await?.json().await?;
    Ok(response)
}

/// POST a signed private command and parse the response as JSON
pub(crate) async fn private_query(
    client: &Client,
    credentials: &Credentials,
    command: &str,
    params: &[(&str, String)],
) -> RestResult<Value> {
    let signer = RequestSigner::new(credentials);
    let body = encode_private(command, signer.nonce(), params)?;
    let signature = signer.sign(&body);

    debug!(command, "Dispatching private command");

    let response = client
        .post(command::TRADING_BASE_URL)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Key", signer.api_key())
        .header("Sign", signature)
        .body(body)
        .send()
        .await?
        .json()
        .await?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_query_string() {
        let params = vec![("currencyPair", "BTC_ETH".to_string())];
        let query = encode_public("returnOrderBook", &params).unwrap();
        assert_eq!(query, "command=returnOrderBook&currencyPair=BTC_ETH");
    }

    #[test]
    fn test_public_query_has_no_nonce() {
        let query = encode_public("returnTicker", &[]).unwrap();
        assert_eq!(query, "command=returnTicker");
        assert!(!query.contains("nonce"));
    }

    #[test]
    fn test_market_trade_history_rewritten_on_wire() {
        let params = vec![("currencyPair", "BTC_XMR".to_string())];
        let query = encode_public("returnMarketTradeHistory", &params).unwrap();
        assert!(query.starts_with("command=returnTradeHistory&"));
        assert!(!query.contains("returnMarketTradeHistory"));
    }

    #[test]
    fn test_private_body_carries_command_and_nonce() {
        let params = vec![("currencyPair", "BTC_ETH".to_string())];
        let body = encode_private("returnOpenOrders", 1616492376594, &params).unwrap();
        assert_eq!(
            body,
            "command=returnOpenOrders&nonce=1616492376594&currencyPair=BTC_ETH"
        );
    }

    #[test]
    fn test_private_body_is_not_rewritten() {
        // The alias applies only to the public path; the private
        // trade-history command keeps its own name.
        let body = encode_private("returnTradeHistory", 1, &[]).unwrap();
        assert_eq!(body, "command=returnTradeHistory&nonce=1");
    }

    #[test]
    fn test_values_are_form_encoded() {
        let params = vec![("address", "1BitcoinEaterAddressDontSendf59kuE?x=1".to_string())];
        let body = encode_private("withdraw", 1, &params).unwrap();
        assert!(body.contains("address=1BitcoinEaterAddressDontSendf59kuE%3Fx%3D1"));
    }
}

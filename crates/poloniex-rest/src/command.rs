//! Command catalogue and endpoint constants
//!
//! Poloniex identifies every REST operation by a `command` parameter rather
//! than a URL path. Commands split into two groups: a fixed set served by
//! the unauthenticated public endpoint, and an open-ended set served by the
//! signed trading endpoint.

/// Base URL for public (unauthenticated) commands
pub const PUBLIC_BASE_URL: &str = "https://poloniex.com/public";

/// Base URL for private (signed) trading commands
pub const TRADING_BASE_URL: &str = "https://poloniex.com/tradingApi";

/// Commands served by the public endpoint; everything else is private
pub const PUBLIC_COMMANDS: [&str; 5] = [
    "returnTicker",
    "return24hVolume",
    "returnOrderBook",
    "returnMarketTradeHistory",
    "returnCurrencies",
];

/// Whether a command is served by the public endpoint
pub fn is_public(command: &str) -> bool {
    PUBLIC_COMMANDS.contains(&command)
}

/// Command name actually sent on the wire
///
/// `returnMarketTradeHistory` is a client-side alias: the public endpoint
/// serves it as `returnTradeHistory`, a name the trading endpoint also uses
/// for the account trade-history command.
pub fn wire_command(command: &str) -> &str {
    if command == "returnMarketTradeHistory" {
        "returnTradeHistory"
    } else {
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_commands_classify_public() {
        for command in PUBLIC_COMMANDS {
            assert!(is_public(command), "{} should be public", command);
        }
    }

    #[test]
    fn test_other_commands_classify_private() {
        for command in [
            "returnBalances",
            "returnTradeHistory",
            "buy",
            "sell",
            "cancelOrder",
            "marginBuy",
            "createLoanOffer",
            "withdraw",
        ] {
            assert!(!is_public(command), "{} should be private", command);
        }
    }

    #[test]
    fn test_market_trade_history_is_rewritten() {
        assert_eq!(wire_command("returnMarketTradeHistory"), "returnTradeHistory");
    }

    #[test]
    fn test_other_commands_pass_through() {
        assert_eq!(wire_command("returnTicker"), "returnTicker");
        assert_eq!(wire_command("returnBalances"), "returnBalances");
    }

    #[test]
    fn test_endpoint_urls() {
        assert!(PUBLIC_BASE_URL.starts_with("https://poloniex.com"));
        assert!(TRADING_BASE_URL.starts_with("https://poloniex.com"));
        assert_ne!(PUBLIC_BASE_URL, TRADING_BASE_URL);
    }
}

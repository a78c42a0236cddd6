//! API endpoint implementations

pub mod account;
pub mod funding;
pub mod lending;
pub mod margin;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use funding::FundingEndpoints;
pub use lending::LendingEndpoints;
pub use margin::MarginEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

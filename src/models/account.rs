//! Account, margin, and holdings models.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::position::Position;

/// Broker account identity, shared by `GET /account/profile` and the
/// `account` object of the summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_shortname: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub broker: String,
    #[serde(default)]
    pub is_live: bool,
}

/// Response from `GET /account/margins`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountMargins {
    #[serde(default)]
    pub net: Decimal,
    #[serde(default)]
    pub cash: Decimal,
    #[serde(default)]
    pub collateral: Decimal,
    #[serde(default)]
    pub option_premium_used: Decimal,
    #[serde(default)]
    pub is_live: bool,
}

/// A demat holding.
#[derive(Debug, Clone, Deserialize)]
pub struct Holding {
    #[serde(alias = "tradingsymbol")]
    pub symbol: String,
    #[serde(default)]
    pub exchange: Option<String>,
    pub quantity: i64,
    pub average_price: Decimal,
    pub last_price: Decimal,
    #[serde(default)]
    pub pnl: Decimal,
}

/// Response from `GET /account/holdings`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountHoldings {
    #[serde(default)]
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub is_live: bool,
}

/// Response from `GET /account/summary`: the whole account picture in
/// one round trip.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSummary {
    #[serde(default)]
    pub account: AccountInfo,
    #[serde(default)]
    pub margins: Option<AccountMargins>,
    /// Positions with non-zero quantity.
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub closed_positions: Vec<Position>,
    #[serde(default)]
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub session_pnl: Decimal,
    #[serde(default)]
    pub total_realized: Decimal,
    #[serde(default)]
    pub total_unrealized: Decimal,
    #[serde(default)]
    pub nifty_ltp: Decimal,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub is_live: bool,
}

//! Market pulse models.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Response from `GET /stats/market-pulse`: coarse market sentiment
/// derived from the session's P&L, plus headline index/P&L figures.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketPulse {
    /// Sentiment score in `0..=100`.
    pub sentiment_score: i64,
    /// e.g. `"bullish"`, `"neutral"`, `"bearish"`.
    pub trend: String,
    #[serde(default)]
    pub volatility: Option<String>,
    #[serde(default)]
    pub nifty_ltp: Decimal,
    #[serde(default)]
    pub session_pnl: Decimal,
    #[serde(default)]
    pub total_realized: Decimal,
    #[serde(default)]
    pub total_unrealized: Decimal,
    /// False when the backend has no live data cache to draw on.
    #[serde(default)]
    pub is_live: bool,
}

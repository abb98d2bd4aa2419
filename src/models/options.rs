//! Options analyzer models (chain, open-interest analysis, strike
//! selection).

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-strike quote in the chain. `last_price` comes from live quotes
/// and `premium` from the analyzer's estimate; either may be present.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionQuote {
    #[serde(default)]
    pub last_price: Option<Decimal>,
    #[serde(default)]
    pub premium: Option<Decimal>,
    #[serde(default)]
    pub oi: u64,
}

/// Response from `GET /options/chain`.
///
/// `calls` and `puts` are keyed by the strike rendered as a string,
/// matching the entries of `strikes`.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionChain {
    pub underlying: String,
    pub spot_price: Decimal,
    pub expiry: String,
    #[serde(default)]
    pub strikes: Vec<Decimal>,
    #[serde(default)]
    pub calls: HashMap<String, OptionQuote>,
    #[serde(default)]
    pub puts: HashMap<String, OptionQuote>,
    pub atm_strike: Decimal,
}

/// Response from `GET /options/oi`.
#[derive(Debug, Clone, Deserialize)]
pub struct OiReport {
    pub oi_analysis: OiAnalysis,
}

/// Open-interest structure analysis for one expiry.
#[derive(Debug, Clone, Deserialize)]
pub struct OiAnalysis {
    /// Put-call ratio.
    pub pcr: f64,
    /// `"BULLISH"`, `"BEARISH"`, or `"NEUTRAL"`.
    pub sentiment: String,
    #[serde(default)]
    pub sentiment_note: Option<String>,
    pub total_call_oi: u64,
    pub total_put_oi: u64,
    pub max_call_oi_strike: Decimal,
    pub max_put_oi_strike: Decimal,
    /// Strike zone with the heaviest call writing.
    pub resistance_zone: Decimal,
    /// Strike zone with the heaviest put writing.
    pub support_zone: Decimal,
    #[serde(default)]
    pub range: Option<String>,
    pub spot_price: Decimal,
}

/// Request body for `POST /options/recommend`.
#[derive(Debug, Clone, Serialize)]
pub struct StrikeRequest {
    pub underlying: String,
    /// `"LONG"` or `"SHORT"`.
    pub direction: String,
    /// Setup score driving aggressiveness of the strike selection.
    pub score: f64,
}

/// Response from `POST /options/recommend`.
#[derive(Debug, Clone, Deserialize)]
pub struct StrikeAdvice {
    pub recommendation: StrikeRecommendation,
}

/// The analyzer's verdict: a tradeable contract or a reasoned skip.
#[derive(Debug, Clone, Deserialize)]
pub struct StrikeRecommendation {
    /// `"TRADE"` or a skip action such as `"SKIP"` / `"WAIT"`.
    pub action: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Populated when `action` is not `"TRADE"`.
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub option: Option<OptionContract>,
    #[serde(default)]
    pub position: Option<PositionPlan>,
    #[serde(default)]
    pub exit_levels: Option<ExitLevels>,
}

/// The concrete contract to trade.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionContract {
    pub tradingsymbol: String,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub strike: Option<Decimal>,
    #[serde(default)]
    pub expiry: Option<String>,
}

/// Sizing for the recommended position.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionPlan {
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub premium: Option<Decimal>,
    #[serde(default)]
    pub total_cost: Option<Decimal>,
    #[serde(default)]
    pub product: Option<String>,
}

/// Exit prices attached to a recommendation.
#[derive(Debug, Clone, Deserialize)]
pub struct ExitLevels {
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    #[serde(default)]
    pub target_1: Option<Decimal>,
    #[serde(default)]
    pub target_2: Option<Decimal>,
}

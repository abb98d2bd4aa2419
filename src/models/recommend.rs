//! Trade recommendation models.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::risk::RiskCheck;

/// Response from `GET /trade/recommend/{symbol}`: the one-click
/// analysis combining scanner, signal engine, mode selector, and risk
/// gate.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeRecommendation {
    pub symbol: String,
    pub score: f64,
    pub setup_type: String,
    pub signal: RecommendationSignal,
    pub mode: TradeMode,
    pub risk: RiskCheck,
    #[serde(default)]
    pub price: Option<Decimal>,
    pub timestamp: String,
}

/// Condensed signal verdict embedded in a recommendation.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSignal {
    pub direction: String,
    pub confidence: f64,
    pub trend_strength: String,
    #[serde(default)]
    pub signals: Vec<String>,
}

/// Execution mode chosen for the trade.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeMode {
    /// e.g. `"EQ_CNC"`, `"FNO_NRML"`.
    pub mode: String,
    pub reason: String,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub expiry_preference: Option<String>,
}

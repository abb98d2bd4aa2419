//! Signal engine models.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Response from `GET /signal/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalReport {
    pub symbol: String,
    pub analysis: SignalAnalysis,
}

/// Full indicator analysis for one symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalAnalysis {
    /// `"LONG"`, `"SHORT"`, or `"NEUTRAL"`.
    pub direction: String,
    /// Confidence in `0..=100`.
    pub confidence: f64,
    pub trend_strength: String,
    pub vwap: VwapReading,
    pub rsi: RsiReading,
    pub supertrend: SupertrendReading,
    pub ema: EmaReading,
    pub atr: AtrReading,
    pub volume: VolumeReading,
    /// Human-readable signal descriptions contributing to the verdict.
    #[serde(default)]
    pub signals: Vec<String>,
    pub scores: DirectionScores,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VwapReading {
    pub value: Decimal,
    /// Price position relative to VWAP, e.g. `"above"`.
    pub position: String,
    pub deviation_pct: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RsiReading {
    pub value: f64,
    /// e.g. `"oversold"`, `"neutral"`, `"overbought"`.
    pub zone: String,
    #[serde(default)]
    pub divergence: Option<Divergence>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Divergence {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupertrendReading {
    pub signal: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmaReading {
    pub trend: String,
    /// Whether the EMA stack is aligned with the trend direction.
    pub aligned: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AtrReading {
    pub value: Decimal,
    /// ATR as a percentage of price.
    pub pct: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolumeReading {
    /// Current volume relative to its average.
    pub ratio: f64,
    pub surge: bool,
}

/// Bull and bear score totals behind the direction verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionScores {
    pub bull: f64,
    pub bear: f64,
}

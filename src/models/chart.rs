//! Chart data models (candles, overlays, analysis markers).

use rust_decimal::Decimal;
use serde::Deserialize;

/// A single OHLC candlestick bar.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartCandle {
    /// Bar date as `YYYY-MM-DD`.
    pub time: String,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

/// A volume histogram bar.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeBar {
    pub time: String,
    pub value: u64,
    /// Render color chosen by the backend (up vs down bar).
    #[serde(default)]
    pub color: Option<String>,
}

/// Response from `GET /chart/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartData {
    pub symbol: String,
    pub candles: Vec<ChartCandle>,
    #[serde(default)]
    pub volumes: Vec<VolumeBar>,
}

/// Response from `GET /chart/symbols`: the chartable watchlist.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSymbols {
    #[serde(default)]
    pub symbols: Vec<String>,
}

/// One point of an overlay line (EMA etc.).
#[derive(Debug, Clone, Deserialize)]
pub struct LinePoint {
    pub time: String,
    pub value: Decimal,
}

/// A fair-value gap detected on the chart.
#[derive(Debug, Clone, Deserialize)]
pub struct FairValueGap {
    #[serde(rename = "type")]
    pub kind: String,
    pub high: Decimal,
    pub low: Decimal,
}

/// A candlestick-pattern marker positioned on the chart.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternMarker {
    pub time: String,
    /// `"aboveBar"` or `"belowBar"`.
    pub position: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub shape: Option<String>,
    pub text: String,
}

/// Response from `GET /chart/{symbol}/analysis`: technical overlays
/// derived from the same data the scanner uses.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartAnalysis {
    pub symbol: String,
    pub score: f64,
    #[serde(default)]
    pub trend: serde_json::Value,
    #[serde(default)]
    pub ema20: Vec<LinePoint>,
    #[serde(default)]
    pub ema50: Vec<LinePoint>,
    #[serde(default)]
    pub support: Vec<Decimal>,
    #[serde(default)]
    pub resistance: Vec<Decimal>,
    #[serde(default)]
    pub fvgs: Vec<FairValueGap>,
    #[serde(default)]
    pub patterns: Vec<PatternMarker>,
    pub setup_type: String,
}

//! Market scanner models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// A single instrument surfaced by a scan.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanResult {
    pub symbol: String,
    /// Setup quality score in `0..=100`.
    pub score: f64,
    pub ltp: Decimal,
    pub trend: String,
    pub setup_type: String,
    #[serde(default)]
    pub signals: Vec<String>,
    #[serde(rename = "stopLoss")]
    pub stop_loss: Decimal,
    pub target1: Decimal,
    pub target2: Decimal,
    pub timestamp: String,
    #[serde(default)]
    pub indicators: Option<ScanIndicators>,
}

/// Indicator readings attached to a scan result.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanIndicators {
    pub rsi: f64,
    pub ema20: Decimal,
    pub ema50: Decimal,
    pub ema_cross: String,
    pub volume_ratio: f64,
    pub supertrend: String,
    pub vwap_position: String,
    pub trend_strength: String,
    /// Distance to nearest support, as a fraction of price.
    pub support_dist: f64,
}

/// Response from `GET /scan/live` and `POST /scan/trigger`.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveScan {
    pub status: String,
    pub timestamp: String,
    #[serde(default)]
    pub universe: Option<String>,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub data: Vec<ScanResult>,
}

/// Response from `GET /scan/latest`: the most recent persisted scan.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestScan {
    /// Set when no scans have been persisted yet.
    #[serde(default)]
    pub message: Option<String>,
    /// Modification time of the scan file, as a unix timestamp.
    #[serde(default)]
    pub timestamp: Option<f64>,
    #[serde(default)]
    pub data: Vec<ScanResult>,
}

/// A value a scan condition compares against.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Number(f64),
    Text(String),
}

/// One condition of a scanner preset, e.g. `RSI < 30`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanCondition {
    pub indicator: String,
    pub operator: String,
    pub value: ConditionValue,
}

/// A predefined scan from the backend's preset gallery.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanPreset {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub conditions: Vec<ScanCondition>,
}

/// A named instrument universe a scan can run over.
#[derive(Debug, Clone, Deserialize)]
pub struct UniverseInfo {
    pub count: usize,
    pub stocks: Vec<String>,
}

/// Response from `GET /scan/presets`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanCatalog {
    #[serde(default)]
    pub presets: HashMap<String, ScanPreset>,
    #[serde(default)]
    pub universes: HashMap<String, UniverseInfo>,
}

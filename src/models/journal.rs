//! Trade journal models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// One logged trade.
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    pub trade_id: String,
    pub symbol: String,
    /// `"open"` or `"closed"`.
    pub status: String,
    pub entry_price: Decimal,
    #[serde(default)]
    pub exit_price: Option<Decimal>,
    pub quantity: i64,
    pub position_size: Decimal,
    #[serde(default)]
    pub pnl: Decimal,
    #[serde(default)]
    pub pnl_pct: f64,
    /// P&L expressed in multiples of the initial risk.
    #[serde(default)]
    pub r_multiple: f64,
    #[serde(default)]
    pub hold_time_minutes: f64,
    pub entry_time: String,
    #[serde(default)]
    pub exit_time: Option<String>,
    #[serde(default)]
    pub exit_type: Option<String>,
    #[serde(default)]
    pub exit_reason: Option<String>,
    #[serde(default)]
    pub entry_reason: Option<String>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub setup_type: Option<String>,
}

/// Aggregate performance over the journal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerformanceSummary {
    #[serde(default)]
    pub total_trades: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub total_pnl: Decimal,
    #[serde(default)]
    pub avg_pnl_per_trade: Decimal,
    #[serde(default)]
    pub avg_r_multiple: f64,
    #[serde(default)]
    pub avg_hold_time_minutes: f64,
    /// Exit-type histogram, e.g. `{"target": 4, "stop_loss": 2}`.
    #[serde(default)]
    pub exit_types: HashMap<String, u32>,
}

/// Response from `GET /journal/trades`.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalTrades {
    #[serde(default)]
    pub trades: Vec<Trade>,
    #[serde(default)]
    pub open_count: usize,
    #[serde(default)]
    pub closed_count: usize,
    #[serde(default)]
    pub summary: PerformanceSummary,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A raw journal line; `scan`, `entry`, and `exit` entries share only
/// these two fields, the rest varies by kind.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Per-day activity counts for the journal heatmap.
#[derive(Debug, Clone, Deserialize)]
pub struct DayActivity {
    #[serde(default)]
    pub scans: u32,
    #[serde(default)]
    pub trades: u32,
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
}

/// Response from `GET /journal/activity`, keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalActivity {
    #[serde(default)]
    pub activity: HashMap<String, DayActivity>,
    #[serde(default)]
    pub total_days: usize,
    #[serde(default)]
    pub timestamp: Option<String>,
}

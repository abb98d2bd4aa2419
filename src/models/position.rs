//! Position models.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A single open or closed position from the backend's live cache.
#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    pub symbol: String,
    #[serde(default)]
    pub exchange: Option<String>,
    pub quantity: i64,
    pub average_price: Decimal,
    pub last_price: Decimal,
    #[serde(default)]
    pub pnl: Decimal,
    #[serde(default)]
    pub pnl_pct: Option<f64>,
    /// Broker product type, e.g. `"NRML"`, `"MIS"`, `"CNC"`.
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    #[serde(default)]
    pub target: Option<Decimal>,
}

/// Response from `GET /positions`.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionBook {
    #[serde(default)]
    pub positions: Vec<Position>,
    /// Session P&L across all positions.
    #[serde(default)]
    pub pnl: Decimal,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub last_update: Option<String>,
}

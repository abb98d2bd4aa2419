//! Risk manager models.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Response from `GET /risk/dashboard`.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskDashboard {
    pub portfolio_heat: PortfolioHeat,
    pub drawdown: Drawdown,
    pub open_positions: u32,
    pub max_positions: u32,
}

/// Capital currently at risk across open positions.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioHeat {
    pub current_pct: f64,
    /// e.g. `"ok"`, `"warning"`, `"critical"`.
    pub status: String,
    pub remaining_budget: Decimal,
}

/// Daily and weekly drawdown against configured loss limits.
#[derive(Debug, Clone, Deserialize)]
pub struct Drawdown {
    pub status: String,
    pub daily_pct: f64,
    pub weekly_pct: f64,
}

/// Verdict from the pre-trade risk gate (`GET /risk/check/{symbol}`),
/// also embedded in trade recommendations.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskCheck {
    /// e.g. `"approved"`, `"blocked"`.
    pub status: String,
    /// Reasons the gate blocked or flagged the trade, when any.
    #[serde(default)]
    pub reasons: Option<Vec<String>>,
}

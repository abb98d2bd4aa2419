//! Order execution models.

use serde::{Deserialize, Serialize};

/// Request body for `POST /execute/order`.
///
/// The backend defaults `dry_run` to `true`; it is a required field
/// here, so placing a live order takes an explicit `dry_run: false`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub symbol: String,
    /// `"BUY"` or `"SELL"`.
    pub direction: String,
    pub quantity: i64,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl OrderRequest {
    /// Builds a dry-run order for `symbol`.
    #[must_use]
    pub fn dry_run(symbol: impl Into<String>, direction: impl Into<String>, quantity: i64) -> Self {
        Self {
            symbol: symbol.into(),
            direction: direction.into(),
            quantity,
            dry_run: true,
            score: None,
        }
    }
}

/// Response from `POST /execute/order`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderOutcome {
    /// e.g. `"PLACED"`, `"DRY_RUN"`, `"BLOCKED"`.
    pub status: String,
    /// Set when the pre-trade gate blocked the order.
    #[serde(default)]
    pub reason: Option<String>,
    /// Raw engine result for placed orders.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Request body for `POST /execute/pre-check`.
#[derive(Debug, Clone, Serialize)]
pub struct PreCheckRequest {
    pub symbol: String,
    pub quantity: i64,
}

/// Verdict of the pre-trade safety checks.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckVerdict {
    pub passed: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Response from `POST /execute/pre-check`.
#[derive(Debug, Clone, Deserialize)]
pub struct PreTradeCheck {
    pub checks: CheckVerdict,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Response from `GET /execute/summary`: today's orders and outcomes.
/// The summary document is owned by the execution engine and varies by
/// configuration, so it stays untyped.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionSummary {
    pub summary: serde_json::Value,
    #[serde(default)]
    pub timestamp: Option<String>,
}

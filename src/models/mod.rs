//! Typed models for the dashboard backend's JSON responses.
//!
//! One module per API domain; shared system-level responses (health,
//! status, module registry, config envelopes) live here. Prices and
//! money amounts use [`rust_decimal::Decimal`]; ratios and percentages
//! stay `f64`. Fields that older backend revisions omit are `Option`
//! or `#[serde(default)]` so partial responses still deserialize.

pub mod account;
pub mod chart;
pub mod execution;
pub mod journal;
pub mod options;
pub mod position;
pub mod pulse;
pub mod recommend;
pub mod risk;
pub mod scan;
pub mod signal;
pub mod tick;

use std::collections::HashMap;

use serde::Deserialize;

/// Response from `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
}

/// Response from `GET /status`.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub is_live: bool,
    /// Age of the backend's live-data cache, absent when nothing is cached.
    #[serde(default)]
    pub cache_age_seconds: Option<f64>,
}

/// Response from `GET /system/modules`: per-module load status strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleStatus {
    pub modules: HashMap<String, String>,
    pub timestamp: String,
}

/// Response from `GET /config`.
///
/// The trading-rules document itself is free-form JSON owned by the
/// backend; only the envelope is typed.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigEnvelope {
    pub config: serde_json::Value,
    #[serde(default)]
    pub path: Option<String>,
    pub timestamp: String,
}

/// Acknowledgement from `PUT /config` with the merged document.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigUpdate {
    pub status: String,
    pub config: serde_json::Value,
    pub timestamp: String,
}

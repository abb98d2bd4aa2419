//! Typed REST binding for the dashboard backend.
//!
//! One async method per endpoint, each returning a typed model from
//! [`crate::models`]. The backend signals application-level failures
//! inside 200 responses (an `{ "error": ... }` field or a
//! `status: "error"` envelope); those are surfaced as
//! [`TapeError::Backend`](crate::TapeError::Backend) so models never
//! carry error fields of their own. Transport and HTTP-status failures
//! map to [`TapeError::Http`](crate::TapeError::Http).

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::Result;
use crate::config::ClientConfig;
use crate::models::account::{AccountHoldings, AccountInfo, AccountMargins, AccountSummary};
use crate::models::chart::{ChartAnalysis, ChartData, ChartSymbols};
use crate::models::execution::{
    ExecutionSummary, OrderOutcome, OrderRequest, PreCheckRequest, PreTradeCheck,
};
use crate::models::journal::{JournalActivity, JournalTrades};
use crate::models::options::{OiReport, OptionChain, StrikeAdvice, StrikeRequest};
use crate::models::position::PositionBook;
use crate::models::pulse::MarketPulse;
use crate::models::recommend::TradeRecommendation;
use crate::models::risk::{RiskCheck, RiskDashboard};
use crate::models::scan::{LatestScan, LiveScan, ScanCatalog};
use crate::models::signal::SignalReport;
use crate::models::tick::TickSnapshot;
use crate::models::{BackendStatus, ConfigEnvelope, ConfigUpdate, Health, ModuleStatus};

/// Async HTTP client for the backend's REST surface.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    api_base: String,
}

impl RestClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`TapeError`](crate::TapeError) if the underlying HTTP
    /// client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_timeout(&config.api_base, config.request_timeout)
    }

    /// Creates a client for `api_base` with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns a [`TapeError`](crate::TapeError) if the underlying HTTP
    /// client cannot be built.
    pub fn with_timeout(api_base: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    // ── Health / status ──────────────────────────────────────────

    pub async fn health(&self) -> Result<Health> {
        self.get("/health").await
    }

    pub async fn status(&self) -> Result<BackendStatus> {
        self.get("/status").await
    }

    pub async fn system_modules(&self) -> Result<ModuleStatus> {
        self.get("/system/modules").await
    }

    // ── Ticks ────────────────────────────────────────────────────

    /// One-shot tick snapshot, the same shape the stream pushes. Used
    /// by the stream client for fallback polling.
    pub async fn latest_ticks(&self) -> Result<TickSnapshot> {
        self.get("/ticks/latest").await
    }

    // ── Market / positions ───────────────────────────────────────

    pub async fn market_pulse(&self) -> Result<MarketPulse> {
        self.get("/stats/market-pulse").await
    }

    pub async fn positions(&self) -> Result<PositionBook> {
        self.get("/positions").await
    }

    // ── Scanner ──────────────────────────────────────────────────

    pub async fn latest_scan(&self) -> Result<LatestScan> {
        self.get("/scan/latest").await
    }

    /// Runs a live scan over `universe`, optionally filtered by a
    /// preset from [`scan_presets`](Self::scan_presets).
    pub async fn live_scan(&self, universe: &str, preset: Option<&str>) -> Result<LiveScan> {
        let mut query = vec![("universe", universe)];
        if let Some(preset) = preset {
            query.push(("preset", preset));
        }
        self.get_with_query("/scan/live", &query).await
    }

    pub async fn scan_presets(&self) -> Result<ScanCatalog> {
        self.get("/scan/presets").await
    }

    /// Triggers a full watchlist scan on the backend.
    pub async fn trigger_scan(&self) -> Result<LiveScan> {
        self.post_empty("/scan/trigger").await
    }

    // ── Signals / recommendations / risk ─────────────────────────

    pub async fn signal(&self, symbol: &str) -> Result<SignalReport> {
        self.get(&format!("/signal/{symbol}")).await
    }

    pub async fn trade_recommendation(&self, symbol: &str) -> Result<TradeRecommendation> {
        self.get(&format!("/trade/recommend/{symbol}")).await
    }

    pub async fn risk_dashboard(&self) -> Result<RiskDashboard> {
        self.get("/risk/dashboard").await
    }

    pub async fn risk_check(&self, symbol: &str, is_options: bool) -> Result<RiskCheck> {
        let is_options = if is_options { "true" } else { "false" };
        self.get_with_query(&format!("/risk/check/{symbol}"), &[("is_options", is_options)])
            .await
    }

    // ── Journal ──────────────────────────────────────────────────

    pub async fn journal_trades(&self) -> Result<JournalTrades> {
        self.get("/journal/trades").await
    }

    pub async fn journal_activity(&self) -> Result<JournalActivity> {
        self.get("/journal/activity").await
    }

    // ── Account ──────────────────────────────────────────────────

    pub async fn account_profile(&self) -> Result<AccountInfo> {
        self.get("/account/profile").await
    }

    pub async fn account_margins(&self) -> Result<AccountMargins> {
        self.get("/account/margins").await
    }

    pub async fn account_holdings(&self) -> Result<AccountHoldings> {
        self.get("/account/holdings").await
    }

    pub async fn account_summary(&self) -> Result<AccountSummary> {
        self.get("/account/summary").await
    }

    // ── Options ──────────────────────────────────────────────────

    /// Option chain for `underlying` at `expiry` (`"weekly"`,
    /// `"next_week"`, or `"monthly"`).
    pub async fn options_chain(&self, underlying: &str, expiry: &str) -> Result<OptionChain> {
        self.get_with_query("/options/chain", &[("underlying", underlying), ("expiry", expiry)])
            .await
    }

    pub async fn options_oi(&self, underlying: &str, expiry: &str) -> Result<OiReport> {
        self.get_with_query("/options/oi", &[("underlying", underlying), ("expiry", expiry)])
            .await
    }

    /// Asks the analyzer to pick a strike for the given direction and
    /// setup score.
    pub async fn options_recommend(&self, request: &StrikeRequest) -> Result<StrikeAdvice> {
        self.post_json("/options/recommend", request).await
    }

    // ── Charts ───────────────────────────────────────────────────

    /// OHLCV candles for `symbol`; `period` is a backend range string
    /// such as `"6mo"` (the default when `None`).
    pub async fn chart(&self, symbol: &str, period: Option<&str>) -> Result<ChartData> {
        let path = format!("/chart/{symbol}");
        match period {
            Some(period) => self.get_with_query(&path, &[("period", period)]).await,
            None => self.get(&path).await,
        }
    }

    pub async fn chart_analysis(&self, symbol: &str) -> Result<ChartAnalysis> {
        self.get(&format!("/chart/{symbol}/analysis")).await
    }

    pub async fn chart_symbols(&self) -> Result<ChartSymbols> {
        self.get("/chart/symbols").await
    }

    // ── Config management ────────────────────────────────────────

    pub async fn trading_config(&self) -> Result<ConfigEnvelope> {
        self.get("/config").await
    }

    /// Merges `updates` into the backend's trading-rules document.
    pub async fn update_trading_config(&self, updates: &serde_json::Value) -> Result<ConfigUpdate> {
        self.put_json("/config", updates).await
    }

    // ── Execution ────────────────────────────────────────────────

    pub async fn execute_order(&self, order: &OrderRequest) -> Result<OrderOutcome> {
        self.post_json("/execute/order", order).await
    }

    pub async fn pre_trade_check(&self, request: &PreCheckRequest) -> Result<PreTradeCheck> {
        self.post_json("/execute/pre-check", request).await
    }

    pub async fn execution_summary(&self) -> Result<ExecutionSummary> {
        self.get("/execute/summary").await
    }

    // ── Request plumbing ─────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        decode(response.json().await?)
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        debug!(%url, "POST");
        let response = self.client.post(&url).send().await?.error_for_status()?;
        decode(response.json().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        decode(response.json().await?)
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        debug!(%url, "PUT");
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        decode(response.json().await?)
    }
}

/// Checks a response body for a backend-reported error before
/// deserializing it into the target model.
fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    if let Some(message) = backend_error(&value) {
        return Err(crate::TapeError::Backend(message));
    }
    Ok(serde_json::from_value(value)?)
}

/// Extracts an application-level error: a non-empty top-level `error`
/// string, or a `status: "error"` envelope.
fn backend_error(value: &serde_json::Value) -> Option<String> {
    if let Some(message) = value
        .get("error")
        .and_then(|e| e.as_str())
        .filter(|s| !s.is_empty())
    {
        return Some(message.to_string());
    }
    if value.get("status").and_then(|s| s.as_str()) == Some("error") {
        return Some("backend reported status \"error\"".to_string());
    }
    None
}

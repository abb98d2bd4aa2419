//! Tick stream wire types.
//!
//! Both the push endpoint and the REST fallback (`GET /ticks/latest`)
//! deliver the same shape: a full snapshot of every instrument's latest
//! tick, keyed by symbol. Snapshots replace the stored map wholesale;
//! they are never merged.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest known market state for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Last traded price.
    pub ltp: Decimal,
    /// Session volume.
    pub volume: Decimal,
    /// Change from previous close.
    pub change: Decimal,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    /// Open interest (zero for non-derivatives).
    pub oi: u64,
    /// Backend capture time for this tick.
    pub updated_at: String,
}

/// A full tick snapshot, as pushed on the stream and returned by
/// `GET /ticks/latest`.
///
/// Stream messages without a `ticks` map are valid but carry no data
/// (the original feed interleaves other message kinds); they are
/// ignored rather than treated as errors.
#[derive(Debug, Clone, Deserialize)]
pub struct TickSnapshot {
    #[serde(default)]
    pub ticks: Option<HashMap<String, Tick>>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl TickSnapshot {
    /// Parses the snapshot timestamp, accepting RFC 3339 or the
    /// backend's zone-less `datetime.isoformat()` output (read as UTC).
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

//! Latest-tick-per-symbol store.
//!
//! The store is owned exclusively by the stream client; consumers only
//! ever get cloned snapshots and lookups. Every applied message
//! replaces the whole map (the backend pushes full snapshots, not
//! deltas).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use crate::config::OrderingPolicy;
use crate::models::tick::{Tick, TickSnapshot};

#[derive(Default)]
struct StoreInner {
    ticks: HashMap<String, Tick>,
    /// Timestamp of the last applied snapshot, when it carried one.
    last_update: Option<DateTime<Utc>>,
}

/// Thread-safe container for the freshest tick per instrument.
pub struct TickStore {
    inner: RwLock<StoreInner>,
    ordering: OrderingPolicy,
}

impl TickStore {
    pub fn new(ordering: OrderingPolicy) -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
            ordering,
        }
    }

    /// Applies a snapshot, replacing all stored entries.
    ///
    /// Returns `false` without touching the store when the snapshot
    /// carries no tick map, or when the ordering policy is
    /// [`TimestampWins`](OrderingPolicy::TimestampWins) and the
    /// snapshot's timestamp is older than the stored one. A snapshot
    /// without a parseable timestamp is applied under either policy.
    pub fn apply(&self, snapshot: TickSnapshot) -> bool {
        let incoming_at = snapshot.parsed_timestamp();
        let Some(ticks) = snapshot.ticks else {
            return false;
        };

        let mut inner = self.inner.write();

        if self.ordering == OrderingPolicy::TimestampWins
            && let (Some(incoming), Some(stored)) = (incoming_at, inner.last_update)
            && incoming < stored
        {
            debug!(%incoming, %stored, "Dropping out-of-order tick snapshot");
            return false;
        }

        inner.ticks = ticks;
        if incoming_at.is_some() {
            inner.last_update = incoming_at;
        }
        true
    }

    /// Returns the current tick for `symbol`, if any. Never blocks on
    /// I/O and never triggers a fetch.
    pub fn get(&self, symbol: &str) -> Option<Tick> {
        self.inner.read().ticks.get(symbol).cloned()
    }

    /// Returns a read-only copy of the whole map, for rendering.
    pub fn all(&self) -> HashMap<String, Tick> {
        self.inner.read().ticks.clone()
    }

    /// Number of instruments currently held.
    pub fn len(&self) -> usize {
        self.inner.read().ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().ticks.is_empty()
    }

    /// Timestamp of the last applied snapshot.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.inner.read().last_update
    }
}

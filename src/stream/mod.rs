//! Live tick streaming client.
//!
//! [`TickStream`] keeps the freshest tick per instrument available to
//! any number of consumers, sourcing from the backend's WebSocket push
//! endpoint with automatic reconnection and REST fallback polling
//! while the stream is down. This module is organized by concern:
//! - `store` - the latest-tick-per-symbol map
//! - `connection` - the background session/reconnect/poll worker

mod connection;
mod store;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::debug;

use self::connection::{StreamCommand, StreamWorker};
use crate::Result;
use crate::config::ClientConfig;
use crate::models::tick::Tick;
use crate::rest::RestClient;

pub use self::store::TickStore;

/// Connection state of the tick stream, observable by consumers.
///
/// There is no terminal state during normal operation; the client
/// always attempts to recover. The only way out is explicit teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection and no attempt in flight.
    Disconnected,
    /// A connection attempt is in flight.
    Connecting,
    /// The push connection is open and delivering updates.
    Live,
    /// The push connection is down but fallback polling is serving
    /// (slightly staler) data.
    Stale,
}

/// State shared between the [`TickStream`] handle and its worker.
pub(crate) struct SharedState {
    pub(crate) store: TickStore,
    state: RwLock<ConnectionState>,
}

impl SharedState {
    fn new(store: TickStore) -> Self {
        Self {
            store,
            state: RwLock::new(ConnectionState::Disconnected),
        }
    }

    pub(crate) fn set_state(&self, next: ConnectionState) {
        let mut state = self.state.write();
        if *state != next {
            debug!(from = ?*state, to = ?next, "Stream state changed");
            *state = next;
        }
    }

    fn state(&self) -> ConnectionState {
        *self.state.read()
    }
}

/// Handle to a running tick stream client.
///
/// Spawning starts a background worker that owns the connection, the
/// reconnect timer, and the fallback poller. The handle exposes
/// read-only lookups plus manual reconnect and teardown. Dropping the
/// handle also tears the worker down.
pub struct TickStream {
    shared: Arc<SharedState>,
    cmd_tx: mpsc::UnboundedSender<StreamCommand>,
}

impl TickStream {
    /// Starts the stream client with the given configuration.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns a [`TapeError`](crate::TapeError) if the configuration
    /// is invalid or the fallback HTTP client cannot be built.
    pub fn spawn(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let rest = RestClient::new(&config)?;
        let shared = Arc::new(SharedState::new(TickStore::new(config.ordering)));
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let worker = StreamWorker::new(
            config.ws_url,
            config.reconnect_delay,
            config.poll_interval,
            rest,
            Arc::clone(&shared),
            cmd_rx,
        );
        tokio::spawn(worker.run());

        Ok(Self { shared, cmd_tx })
    }

    /// Returns the current tick for `symbol`, or `None` if the feed has
    /// not delivered it. Pure lookup: never blocks, never fetches.
    pub fn get_price(&self, symbol: &str) -> Option<Tick> {
        self.shared.store.get(symbol)
    }

    /// Returns a read-only copy of the whole tick map.
    pub fn ticks(&self) -> HashMap<String, Tick> {
        self.shared.store.all()
    }

    /// Number of instruments in the feed.
    pub fn instrument_count(&self) -> usize {
        self.shared.store.len()
    }

    /// Timestamp of the most recent applied snapshot.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.shared.store.last_update()
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        self.shared.state()
    }

    /// Whether the push connection is currently open.
    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Live
    }

    /// Whether consumers are receiving live push updates (as opposed
    /// to fallback-poll data or nothing).
    pub fn is_live(&self) -> bool {
        self.state() == ConnectionState::Live
    }

    /// Closes any current session or pending attempt and reconnects
    /// immediately, skipping the automatic reconnect delay.
    pub fn reconnect(&self) {
        let _ = self.cmd_tx.send(StreamCommand::Reconnect);
    }

    /// Tears the client down: closes the connection and cancels the
    /// reconnect timer and the poll interval. Safe to call repeatedly;
    /// no network calls or store mutations happen afterwards.
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(StreamCommand::Shutdown);
    }
}

impl Drop for TickStream {
    fn drop(&mut self) {
        self.shutdown();
    }
}

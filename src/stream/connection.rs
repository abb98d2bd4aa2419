//! Stream connection lifecycle.
//!
//! [`StreamWorker`] owns the WebSocket session, the fixed-delay
//! reconnect timer, and the REST fallback poller. It runs as a single
//! spawned task; every piece of connection state lives inside it, so
//! returning from [`run`](StreamWorker::run) tears everything down at
//! once; no timer or socket can outlive the worker.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tracing::{debug, info, warn};
use tungstenite::Message as WsMessage;

use super::{ConnectionState, SharedState};
use crate::models::tick::TickSnapshot;
use crate::rest::RestClient;

/// Commands sent from the [`TickStream`](super::TickStream) handle to
/// the worker.
pub(super) enum StreamCommand {
    /// Close the current session (or abandon the current attempt) and
    /// connect again immediately, skipping the reconnect delay.
    Reconnect,
    /// Tear down: close the connection, cancel all timers, exit.
    Shutdown,
}

/// Why a live session ended.
enum SessionExit {
    /// The connection was lost or errored; recover via delay + polling.
    Lost,
    /// A manual reconnect was requested; reconnect without delay.
    Reconnect,
    /// The handle shut down (or was dropped).
    Shutdown,
}

/// Outcome of the disconnected wait period.
enum WaitOutcome {
    Retry,
    Shutdown,
}

/// Background task driving the tick stream.
pub(super) struct StreamWorker {
    ws_url: String,
    reconnect_delay: Duration,
    poll_interval: Duration,
    rest: RestClient,
    shared: Arc<SharedState>,
    cmd_rx: mpsc::UnboundedReceiver<StreamCommand>,
    /// Fallback poll timer; `Some` exactly while polling is active.
    poller: Option<tokio::time::Interval>,
}

impl StreamWorker {
    pub(super) fn new(
        ws_url: String,
        reconnect_delay: Duration,
        poll_interval: Duration,
        rest: RestClient,
        shared: Arc<SharedState>,
        cmd_rx: mpsc::UnboundedReceiver<StreamCommand>,
    ) -> Self {
        Self {
            ws_url,
            reconnect_delay,
            poll_interval,
            rest,
            shared,
            cmd_rx,
            poller: None,
        }
    }

    /// Runs the connect / session / recover cycle until shutdown.
    pub(super) async fn run(mut self) {
        loop {
            self.shared.set_state(ConnectionState::Connecting);
            info!(url = %self.ws_url, "Connecting to tick stream");

            let attempt = connect_async(self.ws_url.clone());
            tokio::pin!(attempt);

            let stream = tokio::select! {
                result = &mut attempt => match result {
                    Ok((stream, _)) => Some(stream),
                    Err(e) => {
                        warn!(error = %e, "Tick stream connection failed");
                        None
                    }
                },
                cmd = self.cmd_rx.recv() => match cmd {
                    // Dropping the pending attempt closes it before the
                    // next one opens.
                    Some(StreamCommand::Reconnect) => continue,
                    Some(StreamCommand::Shutdown) | None => {
                        self.shared.set_state(ConnectionState::Disconnected);
                        return;
                    }
                },
            };

            let Some(stream) = stream else {
                self.shared.set_state(ConnectionState::Disconnected);
                self.start_fallback_polling();
                match self.wait_for_retry().await {
                    WaitOutcome::Retry => continue,
                    WaitOutcome::Shutdown => return,
                }
            };

            // Push connection is up: polling must stop so consumers are
            // never double-sourced.
            self.stop_fallback_polling();
            self.shared.set_state(ConnectionState::Live);
            info!("Tick stream connected");

            match self.session(stream).await {
                SessionExit::Shutdown => {
                    self.shared.set_state(ConnectionState::Disconnected);
                    return;
                }
                SessionExit::Reconnect => {
                    self.shared.set_state(ConnectionState::Disconnected);
                }
                SessionExit::Lost => {
                    self.shared.set_state(ConnectionState::Disconnected);
                    self.start_fallback_polling();
                    match self.wait_for_retry().await {
                        WaitOutcome::Retry => {}
                        WaitOutcome::Shutdown => return,
                    }
                }
            }
        }
    }

    /// Reads the live session until it drops or a command arrives.
    async fn session(
        &mut self,
        stream: tokio_tungstenite::WebSocketStream<
            tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
        >,
    ) -> SessionExit {
        let (mut write, mut read) = stream.split();

        loop {
            tokio::select! {
                msg = read.next() => match msg {
                    Some(Ok(WsMessage::Text(text))) => self.handle_message(&text),
                    Some(Ok(WsMessage::Ping(payload))) => {
                        if write.send(WsMessage::Pong(payload)).await.is_err() {
                            return SessionExit::Lost;
                        }
                    }
                    Some(Ok(WsMessage::Close(frame))) => {
                        warn!(?frame, "Tick stream closed by server");
                        return SessionExit::Lost;
                    }
                    Some(Ok(_)) => {} // Binary/Pong frames
                    Some(Err(e)) => {
                        warn!(error = %e, "Tick stream error");
                        return SessionExit::Lost;
                    }
                    None => {
                        warn!("Tick stream ended");
                        return SessionExit::Lost;
                    }
                },

                cmd = self.cmd_rx.recv() => match cmd {
                    Some(StreamCommand::Reconnect) => {
                        info!("Manual reconnect, closing current session");
                        let _ = write.close().await;
                        return SessionExit::Reconnect;
                    }
                    Some(StreamCommand::Shutdown) | None => {
                        let _ = write.close().await;
                        return SessionExit::Shutdown;
                    }
                },
            }
        }
    }

    /// Parses one stream message and applies it to the store.
    ///
    /// Malformed payloads are logged and dropped; messages without a
    /// tick map are ignored. Neither changes connection state.
    fn handle_message(&self, text: &str) {
        match serde_json::from_str::<TickSnapshot>(text) {
            Ok(snapshot) => {
                if self.shared.store.apply(snapshot) {
                    self.shared.set_state(ConnectionState::Live);
                } else {
                    debug!("Stream message without tick data, ignoring");
                }
            }
            Err(e) => warn!(error = %e, "Malformed tick message dropped"),
        }
    }

    /// Waits out the reconnect delay, serving fallback polls and
    /// commands in the meantime.
    async fn wait_for_retry(&mut self) -> WaitOutcome {
        let deadline = tokio::time::Instant::now() + self.reconnect_delay;
        let retry = tokio::time::sleep_until(deadline);
        tokio::pin!(retry);

        loop {
            tokio::select! {
                () = &mut retry => return WaitOutcome::Retry,

                cmd = self.cmd_rx.recv() => match cmd {
                    Some(StreamCommand::Reconnect) => {
                        info!("Manual reconnect, skipping backoff");
                        return WaitOutcome::Retry;
                    }
                    Some(StreamCommand::Shutdown) | None => return WaitOutcome::Shutdown,
                },

                () = poll_tick(&mut self.poller) => self.poll_snapshot().await,
            }
        }
    }

    /// Arms the fallback poll timer. No-op when already polling. The
    /// first poll fires immediately; later polls follow the configured
    /// interval.
    fn start_fallback_polling(&mut self) {
        if self.poller.is_some() {
            return;
        }
        debug!(interval = ?self.poll_interval, "Starting REST fallback polling");
        self.poller = Some(tokio::time::interval(self.poll_interval));
    }

    /// Cancels fallback polling, if active.
    fn stop_fallback_polling(&mut self) {
        if self.poller.take().is_some() {
            debug!("Fallback polling cancelled");
        }
    }

    /// One fallback poll. Failures are swallowed; the next tick of the
    /// interval simply retries.
    async fn poll_snapshot(&self) {
        match self.rest.latest_ticks().await {
            Ok(snapshot) => {
                if self.shared.store.apply(snapshot) {
                    self.shared.set_state(ConnectionState::Stale);
                }
            }
            Err(e) => debug!(error = %e, "Fallback poll failed"),
        }
    }
}

/// Resolves on the next poll tick, or never when polling is inactive.
async fn poll_tick(poller: &mut Option<tokio::time::Interval>) {
    match poller {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

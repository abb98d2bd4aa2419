//! Shared test utilities: in-process stand-ins for the backend's tick
//! stream and snapshot endpoints, plus timing helpers.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tape::config::{ClientConfig, OrderingPolicy};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, mpsc};
use tokio_tungstenite::accept_async;
use tungstenite::Message;

/// Commands a test sends to the mock stream's active connection.
pub enum WsAction {
    /// Push a text frame to the connected client.
    Send(String),
    /// Close the active connection server-side.
    Close,
}

/// An in-process WebSocket endpoint standing in for `/ws/ticks`.
///
/// Serves one connection at a time; queued actions are delivered to
/// whichever connection is active when they are drained.
pub struct MockStream {
    pub url: String,
    /// Total connections accepted since startup.
    pub accepted: Arc<AtomicUsize>,
    /// Connections currently open.
    pub open: Arc<AtomicUsize>,
    actions: mpsc::UnboundedSender<WsAction>,
}

impl MockStream {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let accepted = Arc::new(AtomicUsize::new(0));
        let open = Arc::new(AtomicUsize::new(0));
        let (actions, rx) = mpsc::unbounded_channel::<WsAction>();
        let rx = Arc::new(Mutex::new(rx));

        {
            let accepted = Arc::clone(&accepted);
            let open = Arc::clone(&open);
            tokio::spawn(async move {
                loop {
                    let Ok((socket, _)) = listener.accept().await else {
                        return;
                    };
                    accepted.fetch_add(1, Ordering::SeqCst);
                    let Ok(mut ws) = accept_async(socket).await else {
                        continue;
                    };
                    open.fetch_add(1, Ordering::SeqCst);

                    let mut actions = rx.lock().await;
                    loop {
                        tokio::select! {
                            action = actions.recv() => match action {
                                Some(WsAction::Send(text)) => {
                                    if ws.send(Message::Text(text.into())).await.is_err() {
                                        break;
                                    }
                                }
                                Some(WsAction::Close) | None => {
                                    let _ = ws.close(None).await;
                                    break;
                                }
                            },
                            msg = ws.next() => match msg {
                                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                                Some(Ok(_)) => {}
                            },
                        }
                    }
                    drop(actions);
                    open.fetch_sub(1, Ordering::SeqCst);
                }
            });
        }

        Self {
            url: format!("ws://{addr}/ws/ticks"),
            accepted,
            open,
            actions,
        }
    }

    /// Pushes a text frame to the active connection.
    pub fn send(&self, text: impl Into<String>) {
        self.actions.send(WsAction::Send(text.into())).unwrap();
    }

    /// Closes the active connection; the endpoint keeps accepting new ones.
    pub fn close_connection(&self) {
        self.actions.send(WsAction::Close).unwrap();
    }

    pub fn open_connections(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    pub fn accepted_connections(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }
}

/// An in-process HTTP endpoint standing in for `GET /ticks/latest`,
/// answering every request with the currently configured body.
pub struct MockSnapshots {
    pub api_base: String,
    /// Requests served since startup.
    pub hits: Arc<AtomicUsize>,
    body: Arc<std::sync::Mutex<String>>,
}

impl MockSnapshots {
    pub async fn spawn(initial_body: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let body = Arc::new(std::sync::Mutex::new(initial_body));

        {
            let hits = Arc::clone(&hits);
            let body = Arc::clone(&body);
            tokio::spawn(async move {
                loop {
                    let Ok((mut socket, _)) = listener.accept().await else {
                        return;
                    };
                    hits.fetch_add(1, Ordering::SeqCst);
                    let payload = body.lock().unwrap().clone();
                    tokio::spawn(async move {
                        // Read the request head; its contents are irrelevant.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;
                        let response = format!(
                            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                            payload.len(),
                            payload
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
            });
        }

        Self {
            api_base: format!("http://{addr}"),
            hits,
            body,
        }
    }

    /// Replaces the body served to subsequent requests.
    pub fn set_body(&self, body: String) {
        *self.body.lock().unwrap() = body;
    }

    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Builds a `{ ticks, timestamp }` snapshot message.
pub fn snapshot_json(entries: &[(&str, f64)], timestamp: &str) -> String {
    let ticks: serde_json::Map<String, serde_json::Value> = entries
        .iter()
        .map(|(symbol, ltp)| {
            (
                symbol.to_string(),
                serde_json::json!({
                    "ltp": ltp,
                    "volume": 125000,
                    "change": 12.5,
                    "open": ltp - 10.0,
                    "high": ltp + 15.0,
                    "low": ltp - 20.0,
                    "close": ltp - 12.5,
                    "oi": 0,
                    "updated_at": timestamp,
                }),
            )
        })
        .collect();
    serde_json::json!({ "ticks": ticks, "timestamp": timestamp }).to_string()
}

/// Client config with intervals shortened for test time.
pub fn test_config(api_base: &str, ws_url: &str) -> ClientConfig {
    ClientConfig {
        api_base: api_base.to_string(),
        ws_url: ws_url.to_string(),
        reconnect_delay: Duration::from_millis(150),
        poll_interval: Duration::from_millis(50),
        request_timeout: Duration::from_secs(2),
        ordering: OrderingPolicy::ArrivalOrder,
    }
}

/// A `ws://` URL on a port nothing is listening on.
pub fn dead_ws_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("ws://{addr}/ws/ticks")
}

/// Polls `condition` every 10 ms until it holds or `timeout` elapses.
pub async fn wait_until<F: Fn() -> bool>(condition: F, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

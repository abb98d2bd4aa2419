//! Crate-level error types.
//!
//! [`TapeError`] unifies every error source (configuration, WebSocket,
//! HTTP, JSON, backend-reported failures) behind a single enum so
//! callers can match on the variant they care about while still using
//! the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TapeError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TapeError {
    /// A configuration value is missing, empty, or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A WebSocket operation (connect, send, receive) failed.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    /// An HTTP request failed or returned a non-success status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend reported an application-level error in its response
    /// body (an `{ "error": ... }` envelope).
    #[error("backend error: {0}")]
    Backend(String),
}

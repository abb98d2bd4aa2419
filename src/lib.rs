//! Async client for the trading dashboard backend.
//!
//! Provides typed models, a REST binding for the backend's API surface
//! (market pulse, positions, scans, signals, risk, journal, account,
//! charts, execution, config), and a resilient tick stream client that
//! keeps the freshest price per instrument available through WebSocket
//! push with automatic REST fallback polling.

pub mod config;
pub mod error;
pub mod models;
pub mod rest;
pub mod stream;

pub use error::{Result, TapeError};

//! # stock-client
//!
//! Submits the stock form to the data endpoint and feeds the response into
//! [`stock_state::AppState`].

pub mod client;

pub use client::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use stock_core::StockResponse;
use wasm_bindgen::JsValue;

/// Default data endpoint, relative to the page origin
pub const DEFAULT_ENDPOINT: &str = "/get_stock_data";

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded {status} {text}")]
    Status { status: u16, text: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("could not read form: {0}")]
    Form(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        Self::Request(e.to_string())
    }
}

impl FetchError {
    /// Wrap a JS exception raised while reading the form
    pub fn form(value: JsValue) -> Self {
        Self::Form(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Decode a response body. Both `stocks` and `metrics` must be present.
pub fn decode_body(text: &str) -> Result<StockResponse, FetchError> {
    serde_json::from_str(text).map_err(|e| FetchError::Decode(e.to_string()))
}

// ============================================================================
// CLIENT CONFIGURATION
// ============================================================================

/// Data client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Apply only the newest submission's response. When off, overlapping
    /// submissions resolve in arrival order and the last one wins.
    pub drop_stale_responses: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            drop_stale_responses: false,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn drop_stale(mut self, drop: bool) -> Self {
        self.drop_stale_responses = drop;
        self
    }
}

// ============================================================================
// REQUEST SEQUENCING (Send + Sync)
// ============================================================================

/// Monotonic request counter shared by all clones of a client
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a new request
    pub fn next(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// No request was issued after `ticket`
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Decide what a finished request may do, given everything issued so far
    pub fn complete(&self, ticket: u64, drop_stale: bool) -> Completion {
        Completion::resolve(drop_stale, self.is_latest(ticket))
    }
}

/// Outcome handling for a finished request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Write the response or error into app state
    pub apply: bool,
    /// Turn the loading indicator off
    pub clear_loading: bool,
}

impl Completion {
    /// Only the newest request clears loading. Older ones are applied in
    /// arrival order unless stale responses are dropped.
    pub fn resolve(drop_stale: bool, latest: bool) -> Self {
        Self {
            apply: latest || !drop_stale,
            clear_loading: latest,
        }
    }
}

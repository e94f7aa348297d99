//! Prediction server data structures.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::detector::PhishingDetector;

/// Shared state for the prediction server
#[derive(Clone)]
pub struct ServerState {
    /// Pipeline shared by all requests.
    pub detector: Arc<PhishingDetector>,
    /// When the server started, for uptime reporting.
    pub start_time: Arc<Instant>,
}

impl ServerState {
    /// Wraps a detector and records the start time.
    pub fn new(detector: PhishingDetector) -> Self {
        Self {
            detector: Arc::new(detector),
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// JSON body accepted by `/predict`
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// URL to score; missing and empty are both rejected.
    #[serde(default)]
    pub url: Option<String>,
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub error: String,
}

/// JSON response for `/status` endpoint
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Seconds since the server started.
    pub uptime_seconds: f64,
    /// URLs that reached a final outcome.
    pub total_requests: usize,
    /// Count per outcome.
    pub outcomes: BTreeMap<&'static str, usize>,
    /// Count per fetch failure category.
    pub fetch_failures: BTreeMap<&'static str, usize>,
}

//! HTTP prediction server.
//!
//! Provides three endpoints:
//! - `POST /predict` - scores `{"url": ...}`, answering `{"url", "result"}`
//! - `GET /favicon.ico` - 204, so browsers do not log errors
//! - `GET /status` - JSON outcome and fetch failure counts
//!
//! Each request is scored on its own task; requests share the detector
//! read-only.

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::detector::PhishingDetector;
use handlers::{favicon_handler, predict_handler, status_handler};
pub use types::{PredictRequest, ServerState, StatusResponse};

/// Builds the router for the prediction endpoints.
pub fn router(detector: PhishingDetector) -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .route("/favicon.ico", get(favicon_handler))
        .route("/status", get(status_handler))
        .with_state(ServerState::new(detector))
}

/// Serves the prediction endpoints on an already-bound listener.
pub async fn serve(listener: TcpListener, detector: PhishingDetector) -> Result<(), anyhow::Error> {
    axum::serve(listener, router(detector))
        .await
        .map_err(|e| anyhow::anyhow!("Prediction server error: {}", e))
}

/// Binds `host:port` and serves the prediction endpoints.
pub async fn start_server(
    host: &str,
    port: u16,
    detector: PhishingDetector,
) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind prediction server to {}:{}: {}", host, port, e))?;

    log::info!("Prediction server listening on http://{}:{}/", host, port);
    log::info!("  - Predict: POST http://{}:{}/predict", host, port);
    log::info!("  - Status: http://{}:{}/status", host, port);

    serve(listener, detector).await
}

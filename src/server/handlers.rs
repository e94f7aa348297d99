//! Request handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use strum::IntoEnumIterator;

use super::types::{ErrorResponse, PredictRequest, ServerState, StatusResponse};
use crate::error_handling::OutcomeType;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Scores the submitted URL
pub async fn predict_handler(
    State(state): State<ServerState>,
    Json(request): Json<PredictRequest>,
) -> Response {
    let url = match request.url {
        Some(url) if !url.is_empty() => url,
        _ => return error_response(StatusCode::BAD_REQUEST, "No URL provided"),
    };

    match state.detector.classify(&url).await {
        Ok(scored) => (StatusCode::OK, Json(scored)).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// Answers browser favicon probes without a body
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// JSON status endpoint with outcome and fetch failure counts
pub async fn status_handler(State(state): State<ServerState>) -> Response {
    let stats = state.detector.stats();
    let response = StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        total_requests: stats.total_requests(),
        outcomes: OutcomeType::iter()
            .map(|outcome| (outcome.as_str(), stats.get_outcome_count(outcome)))
            .collect(),
        fetch_failures: stats.fetch_failure_summary().into_iter().collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

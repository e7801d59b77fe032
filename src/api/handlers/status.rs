//! System state endpoints: health and active scoring standards

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use super::ApiState;
use crate::api::envelope::ApiResponse;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    /// Whether `/api/fetch-from-source` has a source to read
    pub source_configured: bool,
}

/// GET /health
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        source_configured: state.source.is_some(),
    })
}

/// GET /api/v2/standards - Limits, pH band and weights currently in force
pub async fn get_standards(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(&state.config.standards)
}

//! Batch analysis endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use super::ApiState;
use crate::api::envelope::{ApiErrorResponse, ApiResponse, ErrorCode};
use crate::scoring;
use crate::types::{AnalysisReport, AnalysisResult, Sample};

/// Dashboard response: `{ "results": [...] }`
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub results: Vec<AnalysisResult>,
}

/// Samples pulled from the configured source together with their scores.
#[derive(Debug, Serialize)]
pub struct SourceAnalysisResponse {
    pub source: String,
    pub samples: Vec<Sample>,
    pub results: Vec<AnalysisResult>,
}

fn check_batch_size(state: &ApiState, len: usize) -> Result<(), Response> {
    let max = state.config.server.max_batch_size;
    if len > max {
        warn!(samples = len, max, "Rejecting oversized batch");
        return Err(ApiErrorResponse::new(
            ErrorCode::BatchTooLarge,
            format!("batch of {len} samples exceeds the limit of {max}"),
        ));
    }
    Ok(())
}

/// POST /api/analyze - Score a batch of sample records
///
/// Body is a JSON array of `{village, pH, turbidity, lead, arsenic,
/// fluoride, bod}` records. Returns one result per record, in order.
pub async fn analyze_batch(
    State(state): State<ApiState>,
    payload: Result<Json<Vec<Sample>>, JsonRejection>,
) -> Response {
    let Json(samples) = match payload {
        Ok(p) => p,
        Err(rejection) => return ApiErrorResponse::invalid_body(&rejection),
    };
    if let Err(resp) = check_batch_size(&state, samples.len()) {
        return resp;
    }

    let results = scoring::analyze(&samples, &state.config.standards);
    Json(AnalyzeResponse { results }).into_response()
}

/// POST /api/v2/analyze - Score a batch and include the tier summary
pub async fn analyze_report(
    State(state): State<ApiState>,
    payload: Result<Json<Vec<Sample>>, JsonRejection>,
) -> Response {
    let Json(samples) = match payload {
        Ok(p) => p,
        Err(rejection) => return ApiErrorResponse::invalid_body(&rejection),
    };
    if let Err(resp) = check_batch_size(&state, samples.len()) {
        return resp;
    }

    let results = scoring::analyze(&samples, &state.config.standards);
    ApiResponse::batch(AnalysisReport::new(results), samples.len())
}

/// GET /api/fetch-from-source - Pull a batch from the configured source and score it
pub async fn fetch_from_source(State(state): State<ApiState>) -> Response {
    let Some(source) = state.source.clone() else {
        return ApiErrorResponse::new(ErrorCode::NoSource, "no sample source is configured");
    };

    let samples = match source.fetch_batch().await {
        Ok(samples) => samples,
        Err(e) => {
            warn!(source = %source.source_name(), error = %e, "Sample source fetch failed");
            return ApiErrorResponse::new(
                ErrorCode::SourceFailed,
                format!("{} source failed: {e}", source.source_name()),
            );
        }
    };
    if let Err(resp) = check_batch_size(&state, samples.len()) {
        return resp;
    }

    info!(source = %source.source_name(), count = samples.len(), "Fetched samples from source");
    let results = scoring::analyze(&samples, &state.config.standards);
    Json(SourceAnalysisResponse {
        source: source.source_name().to_string(),
        samples,
        results,
    })
    .into_response()
}

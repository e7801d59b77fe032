//! API route definitions
//!
//! - `/api/analyze` - dashboard batch analysis (`{ "results": [...] }`)
//! - `/api/fetch-from-source` - analyze a batch from the configured source
//! - `/api/v2/*` - enveloped responses
//! - `/health` - liveness

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, ApiState};

/// Routes mounted under `/api`
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analyze_batch))
        .route("/fetch-from-source", get(handlers::fetch_from_source))
        .nest("/v2", v2_routes())
        .with_state(state)
}

/// Routes mounted under `/api/v2`
fn v2_routes() -> Router<ApiState> {
    Router::new()
        .route("/analyze", post(handlers::analyze_report))
        .route("/standards", get(handlers::get_standards))
}

/// Health endpoint at root level
pub fn health_routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .with_state(state)
}

//! JSON envelope for v2 responses and for every API error.
//!
//! Success: `{ "data": T, "meta": { "generated_at", "service_version", "samples"? } }`
//!
//! Error: `{ "error": { "code", "message" }, "meta": { ... } }`. Error codes
//! are a closed set ([`ErrorCode`]) and each one owns its HTTP status, except
//! [`ErrorCode::InvalidBody`] which keeps the status axum's JSON extractor chose
//! (400, 415 or 422).

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata attached to every enveloped response.
#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub generated_at: DateTime<Utc>,
    /// Crate version of the scoring service that produced the response
    pub service_version: &'static str,
    /// Number of samples scored, for batch responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
}

impl ResponseMeta {
    fn now(samples: Option<usize>) -> Self {
        Self {
            generated_at: Utc::now(),
            service_version: env!("CARGO_PKG_VERSION"),
            samples,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with `data` and no batch count.
    pub fn ok(data: T) -> Response {
        Self::with_meta(data, ResponseMeta::now(None))
    }

    /// 200 for a scored batch; `meta.samples` carries the batch size.
    pub fn batch(data: T, samples: usize) -> Response {
        Self::with_meta(data, ResponseMeta::now(Some(samples)))
    }

    fn with_meta(data: T, meta: ResponseMeta) -> Response {
        (StatusCode::OK, axum::Json(Self { data, meta })).into_response()
    }
}

/// Machine-readable error codes returned in `error.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    /// Body was not a JSON array of sample records
    InvalidBody,
    /// Batch exceeds `server.max_batch_size`
    BatchTooLarge,
    /// No `[source]` is configured
    NoSource,
    /// The configured source failed to produce a batch
    SourceFailed,
}

impl ErrorCode {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidBody | Self::BatchTooLarge => StatusCode::BAD_REQUEST,
            Self::NoSource => StatusCode::SERVICE_UNAVAILABLE,
            Self::SourceFailed => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ErrorDetail,
    pub meta: ResponseMeta,
}

impl ApiErrorResponse {
    /// Error response using the code's own status.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Response {
        Self::with_status(code.status(), code, message.into())
    }

    /// The sample batch could not be decoded.
    pub fn invalid_body(rejection: &JsonRejection) -> Response {
        Self::with_status(rejection.status(), ErrorCode::InvalidBody, rejection.body_text())
    }

    fn with_status(status: StatusCode, code: ErrorCode, message: String) -> Response {
        let body = Self {
            error: ErrorDetail { code, message },
            meta: ResponseMeta::now(None),
        };
        (status, axum::Json(body)).into_response()
    }
}

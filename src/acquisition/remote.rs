//! Remote sample sources and the fallback wrapper.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::source::{parse_json_batch, SampleSource, SourceError};
use crate::types::Sample;

// ============================================================================
// HTTP Source
// ============================================================================

/// Fetches a JSON array of sample records with a GET request.
pub struct HttpSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl SampleSource for HttpSource {
    async fn fetch_batch(&self) -> Result<Vec<Sample>, SourceError> {
        let resp = self
            .http
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let text = resp.text().await?;
        let samples = parse_json_batch(&text)?;
        tracing::info!(count = samples.len(), url = %self.url, "Fetched samples over HTTP");
        Ok(samples)
    }

    fn source_name(&self) -> &str {
        "HTTP"
    }
}

// ============================================================================
// Fallback Source
// ============================================================================

/// Tries `primary`; on any error logs it and serves `fallback` instead.
///
/// Only the fallback's error is returned when both fail.
pub struct FallbackSource {
    primary: Arc<dyn SampleSource>,
    fallback: Arc<dyn SampleSource>,
    name: String,
}

impl FallbackSource {
    pub fn new(primary: Arc<dyn SampleSource>, fallback: Arc<dyn SampleSource>) -> Self {
        let name = format!("{} with fallback", primary.source_name());
        Self {
            primary,
            fallback,
            name,
        }
    }
}

#[async_trait]
impl SampleSource for FallbackSource {
    async fn fetch_batch(&self) -> Result<Vec<Sample>, SourceError> {
        match self.primary.fetch_batch().await {
            Ok(samples) => Ok(samples),
            Err(e) => {
                tracing::warn!(
                    primary = %self.primary.source_name(),
                    fallback = %self.fallback.source_name(),
                    error = %e,
                    "Primary sample source failed, using fallback"
                );
                self.fallback.fetch_batch().await
            }
        }
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

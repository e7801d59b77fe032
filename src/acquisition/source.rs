//! Sample source trait and the local (file / stdin) implementations.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use super::csv_parser::parse_csv;
use super::remote::{FallbackSource, HttpSource};
use crate::config::{SourceConfig, SourceKind};
use crate::types::Sample;

/// Errors raised while fetching or decoding a sample batch.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("invalid sample JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV input has no header row")]
    EmptyCsv,
    #[error("CSV header has no `village` or `name` column")]
    MissingLabelColumn,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("source returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Trait abstracting where sample batches come from.
///
/// Implementations apply record defaults (pH 7.0, everything else 0) and
/// handle their own I/O failures; callers only see a batch or an error.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Fetch one complete batch of samples.
    async fn fetch_batch(&self) -> Result<Vec<Sample>, SourceError>;

    /// Human-readable name for logging (e.g. "JSON file", "HTTP").
    fn source_name(&self) -> &str;
}

/// Either a bare array of records or an object wrapping one.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordBatch {
    Bare(Vec<Sample>),
    Wrapped {
        #[serde(alias = "villages", alias = "records")]
        samples: Vec<Sample>,
    },
}

/// Decode a JSON sample batch: `[...]` or `{ "samples": [...] }`.
pub fn parse_json_batch(text: &str) -> Result<Vec<Sample>, SourceError> {
    let batch: RecordBatch = serde_json::from_str(text)?;
    Ok(match batch {
        RecordBatch::Bare(samples) | RecordBatch::Wrapped { samples } => samples,
    })
}

async fn read_file(path: &Path) -> Result<String, SourceError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })
}

// ============================================================================
// JSON File Source
// ============================================================================

/// Reads a JSON array of sample records from a file on every fetch.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SampleSource for JsonFileSource {
    async fn fetch_batch(&self) -> Result<Vec<Sample>, SourceError> {
        let text = read_file(&self.path).await?;
        let samples = parse_json_batch(&text)?;
        tracing::info!(count = samples.len(), path = %self.path.display(), "Loaded samples from JSON");
        Ok(samples)
    }

    fn source_name(&self) -> &str {
        "JSON file"
    }
}

// ============================================================================
// CSV File Source
// ============================================================================

/// Reads sample records from a CSV file with a header row.
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SampleSource for CsvFileSource {
    async fn fetch_batch(&self) -> Result<Vec<Sample>, SourceError> {
        let text = read_file(&self.path).await?;
        let samples = parse_csv(&text)?;
        tracing::info!(count = samples.len(), path = %self.path.display(), "Loaded samples from CSV");
        Ok(samples)
    }

    fn source_name(&self) -> &str {
        "CSV file"
    }
}

// ============================================================================
// Stdin Source
// ============================================================================

/// Reads a JSON sample batch from stdin.
///
/// `cat samples.json | aquascore analyze`
pub struct StdinSource;

#[async_trait]
impl SampleSource for StdinSource {
    async fn fetch_batch(&self) -> Result<Vec<Sample>, SourceError> {
        use tokio::io::AsyncReadExt;
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .map_err(SourceError::Stdin)?;
        parse_json_batch(&text)
    }

    fn source_name(&self) -> &str {
        "stdin"
    }
}

// ============================================================================
// Construction
// ============================================================================

/// File source chosen by extension: `.csv` is CSV, anything else JSON.
pub fn file_source(path: &Path) -> Arc<dyn SampleSource> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Arc::new(CsvFileSource::new(path))
    } else {
        Arc::new(JsonFileSource::new(path))
    }
}

/// Build the configured source, wrapped with its fallback when one is set.
///
/// Returns `Ok(None)` when no source is configured. Missing `path`/`url`
/// values are rejected earlier by config validation and also yield `None`.
pub fn source_from_config(
    config: &SourceConfig,
) -> Result<Option<Arc<dyn SampleSource>>, SourceError> {
    let primary: Arc<dyn SampleSource> = match (config.kind, &config.path, &config.url) {
        (SourceKind::None, _, _) => return Ok(None),
        (SourceKind::Json, Some(path), _) => Arc::new(JsonFileSource::new(path)),
        (SourceKind::Csv, Some(path), _) => Arc::new(CsvFileSource::new(path)),
        (SourceKind::Http, _, Some(url)) => Arc::new(HttpSource::new(
            url,
            Duration::from_secs(config.timeout_secs),
        )?),
        _ => return Ok(None),
    };

    let source: Arc<dyn SampleSource> = match &config.fallback_path {
        Some(path) => Arc::new(FallbackSource::new(primary, file_source(path))),
        None => primary,
    };
    Ok(Some(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RECORDS: &str = r#"[
        {"village":"A","pH":7.2,"turbidity":5.0,"lead":0.01,"arsenic":0.005,"fluoride":0.8,"bod":2.0},
        {"village":"B","lead":0.02}
    ]"#;

    #[test]
    fn test_parse_bare_array() {
        let samples = parse_json_batch(RECORDS).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].name, "B");
        assert_eq!(samples[1].ph, 7.0);
    }

    #[test]
    fn test_parse_wrapped_object() {
        let samples = parse_json_batch(r#"{"villages":[{"village":"X"}]}"#).unwrap();
        assert_eq!(samples.len(), 1);
        let samples = parse_json_batch(r#"{"samples":[]}"#).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_records() {
        assert!(matches!(
            parse_json_batch(r#"[{"village":"A","lead":"lots"}]"#),
            Err(SourceError::Json(_))
        ));
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RECORDS.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let samples = source.fetch_batch().await.unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].arsenic, 0.005);
    }

    #[test]
    fn test_csv_file_source_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.CSV");
        std::fs::write(&path, "village,lead\nA,0.02\nB,0.001\n").unwrap();

        let source = file_source(&path);
        assert_eq!(source.source_name(), "CSV file");
        let samples = tokio_test::block_on(source.fetch_batch()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].lead, 0.02);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = JsonFileSource::new("/nonexistent/samples.json");
        let err = source.fetch_batch().await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/samples.json"));
    }

    #[test]
    fn test_source_from_config() {
        assert!(source_from_config(&SourceConfig::default()).unwrap().is_none());

        let config = SourceConfig {
            kind: SourceKind::Csv,
            path: Some(PathBuf::from("samples.csv")),
            ..SourceConfig::default()
        };
        let source = source_from_config(&config).unwrap().unwrap();
        assert_eq!(source.source_name(), "CSV file");

        let config = SourceConfig {
            kind: SourceKind::Http,
            url: Some("http://127.0.0.1:9/samples".to_string()),
            fallback_path: Some(PathBuf::from("samples.json")),
            ..SourceConfig::default()
        };
        let source = source_from_config(&config).unwrap().unwrap();
        assert_eq!(source.source_name(), "HTTP with fallback");
    }
}

//! Application configuration: TOML loading, saving and validation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;
use super::standards::ScoringStandards;
use super::validation;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for an AquaScore deployment.
///
/// Load with `AppConfig::load()` which searches (after an explicit `--config`):
/// 1. `$AQUASCORE_CONFIG` env var
/// 2. `./aquascore.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Regulatory limits, pH band and weights
    #[serde(default)]
    pub standards: ScoringStandards,

    /// Where `/api/fetch-from-source` pulls sample batches from
    #[serde(default)]
    pub source: SourceConfig,
}

impl AppConfig {
    /// Load configuration using the standard search order.
    ///
    /// A missing file moves on to the next step. A file that exists but fails
    /// to read, parse or validate is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(defaults::CONFIG_ENV_VAR).map(PathBuf::from);
        Self::resolve(env_path.as_deref(), Path::new(defaults::LOCAL_CONFIG_FILE))
    }

    /// Search order with the env var value and local path supplied explicitly.
    fn resolve(env_path: Option<&Path>, local: &Path) -> Result<Self, ConfigError> {
        // 1. Env var
        if let Some(p) = env_path {
            if p.exists() {
                let config = Self::load_from_file(p)?;
                info!(path = %p.display(), "Loaded config from {}", defaults::CONFIG_ENV_VAR);
                return Ok(config);
            }
            warn!(path = %p.display(), "{} points to non-existent file, falling back", defaults::CONFIG_ENV_VAR);
        }

        // 2. ./aquascore.toml
        if local.exists() {
            let config = Self::load_from_file(local)?;
            info!(path = %local.display(), "Loaded local config");
            return Ok(config);
        }

        // 3. Defaults
        info!("No {} found, using built-in defaults", defaults::LOCAL_CONFIG_FILE);
        Ok(Self::default())
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents, path)
    }

    /// Parse and validate TOML text. `origin` is only used in error messages.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        // Two-pass: check for unknown keys first (warnings only)
        for w in validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(origin.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate value ranges. Suspicious-but-usable values are logged as
    /// warnings; impossible values are returned as errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = validation::validate_ranges(self);
        for w in &warnings {
            warn!(field = %w.field, "{}", w);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ============================================================================
// Server
// ============================================================================

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    ///
    /// Can be overridden by `AQUASCORE_SERVER_ADDR` env var or `--addr` CLI flag.
    #[serde(default = "default_server_addr")]
    pub addr: String,

    /// Origins allowed to call the API from a browser.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Largest batch accepted by a single analyze request.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

fn default_server_addr() -> String {
    defaults::DEFAULT_SERVER_ADDR.to_string()
}

fn default_cors_origins() -> Vec<String> {
    defaults::DEFAULT_CORS_ORIGINS.iter().map(ToString::to_string).collect()
}

const fn default_max_batch_size() -> usize {
    defaults::DEFAULT_MAX_BATCH_SIZE
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
            cors_origins: default_cors_origins(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

// ============================================================================
// Sample Source
// ============================================================================

/// Kind of external sample source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    None,
    Json,
    Csv,
    Http,
}

/// External sample source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,

    /// File path for `json` / `csv` sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Endpoint for `http` sources (must return a JSON array of records)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// HTTP request timeout
    #[serde(default = "default_source_timeout_secs")]
    pub timeout_secs: u64,

    /// Local file used when the primary source fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_path: Option<PathBuf>,
}

const fn default_source_timeout_secs() -> u64 {
    defaults::DEFAULT_SOURCE_TIMEOUT_SECS
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::None,
            path: None,
            url: None,
            timeout_secs: default_source_timeout_secs(),
            fallback_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.addr, "0.0.0.0:8000");
        assert_eq!(config.server.cors_origins.len(), 2);
        assert_eq!(config.source.kind, SourceKind::None);
    }

    #[test]
    fn test_toml_roundtrip_preserves_values() {
        let mut config = AppConfig::default();
        config.standards.limits.fluoride = 1.0;
        config.source.kind = SourceKind::Csv;
        config.source.path = Some(PathBuf::from("samples.csv"));

        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml_str(&text, Path::new("inline")).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let parsed = AppConfig::from_toml_str("", Path::new("inline")).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = AppConfig::from_toml_str("[server\naddr = 1", Path::new("broken.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_, _)));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let text = r#"
[standards.ph_band]
min = 9.0
max = 6.0
"#;
        let err = AppConfig::from_toml_str(text, Path::new("inline")).unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.contains("ph_band")));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aquascore.toml");

        let mut config = AppConfig::default();
        config.server.addr = "127.0.0.1:9000".to_string();
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.server.addr, "127.0.0.1:9000");
    }

    fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_resolve_env_file_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let env = write_config(dir.path(), "env.toml", "[standards.limits]\nlead = 0.05\n");
        let local = write_config(dir.path(), "aquascore.toml", "[standards.limits]\nlead = 0.02\n");

        let config = AppConfig::resolve(Some(&env), &local).unwrap();
        assert!((config.standards.limits.lead - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_missing_env_file_falls_back_to_local() {
        let dir = tempfile::tempdir().unwrap();
        let local = write_config(dir.path(), "aquascore.toml", "[standards.limits]\nlead = 0.02\n");
        let missing = dir.path().join("absent.toml");

        let config = AppConfig::resolve(Some(&missing), &local).unwrap();
        assert!((config.standards.limits.lead - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_defaults_when_no_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let local = dir.path().join("aquascore.toml");

        let config = AppConfig::resolve(Some(&missing), &local).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(AppConfig::resolve(None, &local).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_resolve_rejects_invalid_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let env = write_config(
            dir.path(),
            "env.toml",
            "[standards.limits]\nlead = 0.05\n\n[standards.ph_band]\nmin = 9.0\nmax = 6.0\n",
        );
        let local = write_config(dir.path(), "aquascore.toml", "");

        let err = AppConfig::resolve(Some(&env), &local).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "got {err}");
    }

    #[test]
    fn test_resolve_rejects_unparseable_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let local = write_config(dir.path(), "aquascore.toml", "[standards.limits\nlead = ");

        let err = AppConfig::resolve(None, &local).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_, _)), "got {err}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::load_from_file(Path::new("/nonexistent/aquascore.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_, _)));
    }
}

//! System-wide default constants.
//!
//! Built-in values used when no `aquascore.toml` is present. Grouped by
//! subsystem for easy discovery.

// ============================================================================
// Regulatory Limits
// ============================================================================

/// Lead limit (mg/L)
pub const LEAD_LIMIT: f64 = 0.01;

/// Arsenic limit (mg/L)
pub const ARSENIC_LIMIT: f64 = 0.01;

/// Fluoride limit (mg/L)
pub const FLUORIDE_LIMIT: f64 = 1.5;

/// Turbidity limit (NTU)
pub const TURBIDITY_LIMIT: f64 = 5.0;

/// Biochemical oxygen demand limit (mg/L)
pub const BOD_LIMIT: f64 = 3.0;

/// Lower bound of the acceptable pH band (inclusive).
pub const PH_MIN: f64 = 6.5;

/// Upper bound of the acceptable pH band (inclusive).
pub const PH_MAX: f64 = 8.5;

// ============================================================================
// Parameter Weights
// ============================================================================

pub const PH_WEIGHT: f64 = 1.0;
pub const TURBIDITY_WEIGHT: f64 = 1.0;
/// Heavy metals carry extra weight in both indices.
pub const LEAD_WEIGHT: f64 = 1.5;
pub const ARSENIC_WEIGHT: f64 = 1.5;
pub const FLUORIDE_WEIGHT: f64 = 1.0;
pub const BOD_WEIGHT: f64 = 1.0;

// ============================================================================
// Sample Records
// ============================================================================

/// pH assumed when a record omits it. Other measurements default to 0.
pub const DEFAULT_SAMPLE_PH: f64 = 7.0;

// ============================================================================
// Server
// ============================================================================

/// HTTP bind address (the dashboard expects port 8000).
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8000";

/// Dashboard dev-server origins allowed by default.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Largest batch accepted by a single analyze request.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 10_000;

// ============================================================================
// Sample Sources
// ============================================================================

/// HTTP client timeout for remote sample sources (seconds).
pub const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Config Discovery
// ============================================================================

/// Environment variable holding an explicit config file path.
pub const CONFIG_ENV_VAR: &str = "AQUASCORE_CONFIG";

/// Config file looked up in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "aquascore.toml";

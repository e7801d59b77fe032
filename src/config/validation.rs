//! Config validation: unknown-key detection with Levenshtein suggestions
//! and value range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Unknown keys never break a config.

use std::collections::HashSet;

use super::{AppConfig, SourceKind};

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `AppConfig`.
///
/// Must be kept in step with the struct hierarchy in `app_config.rs` and
/// `standards.rs`.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [server]
        "server",
        "server.addr",
        "server.cors_origins",
        "server.max_batch_size",
        // [standards]
        "standards",
        "standards.limits",
        "standards.limits.lead",
        "standards.limits.arsenic",
        "standards.limits.fluoride",
        "standards.limits.turbidity",
        "standards.limits.bod",
        "standards.ph_band",
        "standards.ph_band.min",
        "standards.ph_band.max",
        "standards.weights",
        "standards.weights.ph",
        "standards.weights.turbidity",
        "standards.weights.lead",
        "standards.weights.arsenic",
        "standards.weights.fluoride",
        "standards.weights.bod",
        // [source]
        "source",
        "source.kind",
        "source.path",
        "source.url",
        "source.timeout_secs",
        "source.fallback_path",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (*k, levenshtein(unknown, k)))
        .filter(|(_, dist)| *dist <= 3)
        // Tie-break on the key itself so suggestions are deterministic.
        .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys, it only warns.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

/// Validate value ranges on a parsed `AppConfig`.
///
/// Returns (errors, warnings). Errors are values that make scoring
/// meaningless and must prevent startup; warnings are degenerate but usable.
pub fn validate_ranges(config: &AppConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let limits = &config.standards.limits;
    for (name, value) in [
        ("lead", limits.lead),
        ("arsenic", limits.arsenic),
        ("fluoride", limits.fluoride),
        ("turbidity", limits.turbidity),
        ("bod", limits.bod),
    ] {
        if !value.is_finite() {
            errors.push(format!("standards.limits.{name} = {value} must be finite"));
        } else if value <= 0.0 {
            warnings.push(ValidationWarning {
                field: format!("standards.limits.{name}"),
                message: format!(
                    "standards.limits.{name} = {value} is not positive; {name} will always rate 0"
                ),
                suggestion: None,
            });
        }
    }

    let weights = &config.standards.weights;
    for (name, value) in [
        ("ph", weights.ph),
        ("turbidity", weights.turbidity),
        ("lead", weights.lead),
        ("arsenic", weights.arsenic),
        ("fluoride", weights.fluoride),
        ("bod", weights.bod),
    ] {
        if !value.is_finite() || value < 0.0 {
            errors.push(format!(
                "standards.weights.{name} = {value} must be a finite, non-negative number"
            ));
        }
    }
    if weights.total() == 0.0 {
        warnings.push(ValidationWarning {
            field: "standards.weights".to_string(),
            message: "all parameter weights are zero; every WQI will be 0".to_string(),
            suggestion: None,
        });
    }

    let band = &config.standards.ph_band;
    if !band.min.is_finite() || !band.max.is_finite() {
        errors.push(format!(
            "standards.ph_band: bounds must be finite (got min={}, max={})",
            band.min, band.max
        ));
    } else if band.min > band.max {
        errors.push(format!(
            "standards.ph_band: min ({}) must not exceed max ({})",
            band.min, band.max
        ));
    }

    if config.server.max_batch_size == 0 {
        errors.push("server.max_batch_size must be > 0".to_string());
    }

    let source = &config.source;
    match source.kind {
        SourceKind::Json | SourceKind::Csv if source.path.is_none() => {
            errors.push("source.path is required for json and csv sources".to_string());
        }
        SourceKind::Http if source.url.is_none() => {
            errors.push("source.url is required for http sources".to_string());
        }
        _ => {}
    }
    if source.kind == SourceKind::Http && source.timeout_secs == 0 {
        errors.push("source.timeout_secs must be > 0".to_string());
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================

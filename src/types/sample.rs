//! Water sample records

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// One location's water measurements.
///
/// Wire shape: `{ village, pH, turbidity, lead, arsenic, fluoride, bod }`.
/// Missing numeric fields take the defaults sources are expected to apply
/// (pH 7.0, everything else 0). Values are never clamped; negative
/// concentrations are accepted and produce negative quality ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Location / village label
    #[serde(rename = "village", alias = "name")]
    pub name: String,

    /// Acidity (dimensionless, nominally 0-14)
    #[serde(rename = "pH", alias = "ph", default = "default_ph")]
    pub ph: f64,

    /// Turbidity (NTU)
    #[serde(default)]
    pub turbidity: f64,

    /// Lead (mg/L)
    #[serde(default)]
    pub lead: f64,

    /// Arsenic (mg/L)
    #[serde(default)]
    pub arsenic: f64,

    /// Fluoride (mg/L)
    #[serde(default)]
    pub fluoride: f64,

    /// Biochemical oxygen demand (mg/L)
    #[serde(default)]
    pub bod: f64,
}

fn default_ph() -> f64 {
    defaults::DEFAULT_SAMPLE_PH
}

impl Sample {
    /// A sample with the given label and every measurement at its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ph: defaults::DEFAULT_SAMPLE_PH,
            turbidity: 0.0,
            lead: 0.0,
            arsenic: 0.0,
            fluoride: 0.0,
            bod: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dashboard_record() {
        let json = r#"{"village":"Rampur","pH":7.2,"turbidity":5.0,"lead":0.01,
                       "arsenic":0.005,"fluoride":0.8,"bod":2.0}"#;
        let sample: Sample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.name, "Rampur");
        assert_eq!(sample.ph, 7.2);
        assert_eq!(sample.arsenic, 0.005);
        assert_eq!(sample.bod, 2.0);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let sample: Sample = serde_json::from_str(r#"{"village":"Empty"}"#).unwrap();
        assert_eq!(sample, Sample::named("Empty"));
        assert_eq!(sample.ph, 7.0);
        assert_eq!(sample.lead, 0.0);
    }

    #[test]
    fn test_name_alias_accepted() {
        let sample: Sample = serde_json::from_str(r#"{"name":"Well 4","ph":6.1}"#).unwrap();
        assert_eq!(sample.name, "Well 4");
        assert_eq!(sample.ph, 6.1);
    }

    #[test]
    fn test_negative_values_accepted() {
        let sample: Sample =
            serde_json::from_str(r#"{"village":"Odd","lead":-0.02}"#).unwrap();
        assert_eq!(sample.lead, -0.02);
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let result: Result<Sample, _> =
            serde_json::from_str(r#"{"village":"Bad","lead":"high"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_wire_keys() {
        let v = serde_json::to_value(Sample::named("A")).unwrap();
        assert_eq!(v["village"], "A");
        assert_eq!(v["pH"], 7.0);
        assert!(v.get("name").is_none());
    }
}

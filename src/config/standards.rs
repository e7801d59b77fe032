//! Scoring standards: regulatory limits, the pH band and parameter weights.
//!
//! Passed explicitly into the index calculator so alternate regulatory
//! standards can be scored side by side without any global state.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Everything the index calculator needs besides the sample itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringStandards {
    pub limits: ParameterLimits,
    pub ph_band: PhBand,
    pub weights: ParameterWeights,
}

/// Regulatory threshold per parameter.
///
/// A non-positive limit means the parameter contributes a rating of 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterLimits {
    pub lead: f64,
    pub arsenic: f64,
    pub fluoride: f64,
    pub turbidity: f64,
    pub bod: f64,
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            lead: defaults::LEAD_LIMIT,
            arsenic: defaults::ARSENIC_LIMIT,
            fluoride: defaults::FLUORIDE_LIMIT,
            turbidity: defaults::TURBIDITY_LIMIT,
            bod: defaults::BOD_LIMIT,
        }
    }
}

/// Closed acceptable pH interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhBand {
    pub min: f64,
    pub max: f64,
}

impl PhBand {
    /// True when `ph` lies inside the band, bounds included.
    pub fn contains(&self, ph: f64) -> bool {
        ph >= self.min && ph <= self.max
    }
}

impl Default for PhBand {
    fn default() -> Self {
        Self {
            min: defaults::PH_MIN,
            max: defaults::PH_MAX,
        }
    }
}

/// Contribution weight per parameter in the aggregate indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterWeights {
    pub ph: f64,
    pub turbidity: f64,
    pub lead: f64,
    pub arsenic: f64,
    pub fluoride: f64,
    pub bod: f64,
}

impl ParameterWeights {
    pub fn total(&self) -> f64 {
        self.ph + self.turbidity + self.lead + self.arsenic + self.fluoride + self.bod
    }
}

impl Default for ParameterWeights {
    fn default() -> Self {
        Self {
            ph: defaults::PH_WEIGHT,
            turbidity: defaults::TURBIDITY_WEIGHT,
            lead: defaults::LEAD_WEIGHT,
            arsenic: defaults::ARSENIC_WEIGHT,
            fluoride: defaults::FLUORIDE_WEIGHT,
            bod: defaults::BOD_WEIGHT,
        }
    }
}

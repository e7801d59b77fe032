//! Threshold-based risk tiers from WQI/HPI

use crate::types::RiskLevel;

/// Either score above this is unfit.
pub const UNFIT_THRESHOLD: f64 = 100.0;
/// Either score above this is very poor.
pub const VERY_POOR_THRESHOLD: f64 = 75.0;
/// Either score above this is poor.
pub const POOR_THRESHOLD: f64 = 50.0;
/// WQI above this is a warning. HPI is not consulted at this tier.
pub const WARNING_THRESHOLD: f64 = 25.0;

/// Map scores to a risk tier, most severe first. Bounds are exclusive.
///
/// The warning tier looks at `wqi` alone; an elevated `hpi` below the poor
/// threshold does not raise a location out of `safe`. NaN scores compare
/// false everywhere and fall through to `safe`.
pub fn risk_level(wqi: f64, hpi: f64) -> RiskLevel {
    if wqi > UNFIT_THRESHOLD || hpi > UNFIT_THRESHOLD {
        RiskLevel::Unfit
    } else if wqi > VERY_POOR_THRESHOLD || hpi > VERY_POOR_THRESHOLD {
        RiskLevel::VeryPoor
    } else if wqi > POOR_THRESHOLD || hpi > POOR_THRESHOLD {
        RiskLevel::Poor
    } else if wqi > WARNING_THRESHOLD {
        RiskLevel::Warning
    } else {
        RiskLevel::Safe
    }
}

/// Classify scores into a risk tier and its advisory alerts.
pub fn classify_risk(wqi: f64, hpi: f64) -> (RiskLevel, Vec<String>) {
    let level = risk_level(wqi, hpi);
    (level, vec![level.advisory().to_string()])
}

//! Per-parameter quality ratings

use crate::config::{PhBand, ScoringStandards};
use crate::types::Sample;

/// Normalized deviation of `value` from `ideal`, relative to the regulatory
/// `standard`, scaled so that 100 means "exactly at the limit".
///
/// Formula: ((value - ideal) / (standard - ideal)) * 100
///
/// ## Behaviour
/// - `standard <= 0`: returns 0 (no contribution)
/// - Above-limit values rate over 100; the result is never clamped
/// - Negative inputs produce negative ratings
pub fn quality_rating(value: f64, ideal: f64, standard: f64) -> f64 {
    if standard <= 0.0 {
        return 0.0;
    }
    ((value - ideal) / (standard - ideal)) * 100.0
}

/// Pass/fail pH rating: 0 inside the closed band, 100 outside it.
///
/// pH has no single ideal direction, so it is not rated continuously.
pub fn ph_rating(ph: f64, band: &PhBand) -> f64 {
    if band.contains(ph) {
        0.0
    } else {
        100.0
    }
}

/// Quality rating of every parameter for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRatings {
    pub ph: f64,
    pub turbidity: f64,
    pub bod: f64,
    pub lead: f64,
    pub arsenic: f64,
    pub fluoride: f64,
}

impl ParameterRatings {
    /// Rate each parameter against its limit (ideal 0 for everything but pH).
    pub fn rate(sample: &Sample, standards: &ScoringStandards) -> Self {
        let limits = &standards.limits;
        Self {
            ph: ph_rating(sample.ph, &standards.ph_band),
            turbidity: quality_rating(sample.turbidity, 0.0, limits.turbidity),
            bod: quality_rating(sample.bod, 0.0, limits.bod),
            lead: quality_rating(sample.lead, 0.0, limits.lead),
            arsenic: quality_rating(sample.arsenic, 0.0, limits.arsenic),
            fluoride: quality_rating(sample.fluoride, 0.0, limits.fluoride),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rating_at_limit_is_100() {
        assert!((quality_rating(5.0, 0.0, 5.0) - 100.0).abs() < EPS);
        assert!((quality_rating(0.01, 0.0, 0.01) - 100.0).abs() < EPS);
    }

    #[test]
    fn test_rating_is_linear() {
        assert!((quality_rating(6.0, 0.0, 3.0) - 200.0).abs() < EPS);
        assert!((quality_rating(1.5, 0.0, 3.0) - 50.0).abs() < EPS);
        assert_eq!(quality_rating(0.0, 0.0, 3.0), 0.0);
    }

    #[test]
    fn test_rating_with_nonzero_ideal() {
        // Halfway between ideal 2 and standard 10
        assert!((quality_rating(6.0, 2.0, 10.0) - 50.0).abs() < EPS);
    }

    #[test]
    fn test_non_positive_standard_rates_zero() {
        assert_eq!(quality_rating(42.0, 0.0, 0.0), 0.0);
        assert_eq!(quality_rating(42.0, 7.0, 0.0), 0.0);
        assert_eq!(quality_rating(-3.0, 0.0, -1.0), 0.0);
    }

    #[test]
    fn test_negative_value_rates_negative() {
        assert!((quality_rating(-1.5, 0.0, 1.5) + 100.0).abs() < EPS);
    }

    #[test]
    fn test_ph_rating_binary() {
        let band = PhBand::default();
        assert_eq!(ph_rating(6.5, &band), 0.0);
        assert_eq!(ph_rating(8.5, &band), 0.0);
        assert_eq!(ph_rating(7.2, &band), 0.0);
        assert_eq!(ph_rating(6.4999, &band), 100.0);
        assert_eq!(ph_rating(8.5001, &band), 100.0);
        assert_eq!(ph_rating(0.0, &band), 100.0);
        assert_eq!(ph_rating(14.0, &band), 100.0);
    }

    #[test]
    fn test_rate_reference_sample() {
        let sample = Sample {
            ph: 7.2,
            turbidity: 5.0,
            lead: 0.01,
            arsenic: 0.005,
            fluoride: 0.8,
            bod: 2.0,
            ..Sample::named("Rampur")
        };
        let r = ParameterRatings::rate(&sample, &ScoringStandards::default());
        assert_eq!(r.ph, 0.0);
        assert!((r.turbidity - 100.0).abs() < EPS);
        assert!((r.bod - 66.666_666_666).abs() < 1e-6);
        assert!((r.lead - 100.0).abs() < EPS);
        assert!((r.arsenic - 50.0).abs() < EPS);
        assert!((r.fluoride - 53.333_333_333).abs() < 1e-6);
    }
}

//! Scoring Engine
//!
//! ```text
//! Sample ──► quality ratings ──► WQI / HPI ──► risk tier + alerts ──► AnalysisResult
//! ```
//!
//! Every function here is pure and total over finite and non-finite inputs:
//! degenerate standards degrade to zero scores instead of failing. Batches
//! are scored sequentially so results keep input order.

mod classifier;
mod indices;
mod quality;

pub use classifier::*;
pub use indices::*;
pub use quality::*;

use tracing::{debug, info};

use crate::config::ScoringStandards;
use crate::types::{AnalysisResult, BatchSummary, Sample};

/// Score a single sample.
///
/// The tier is assigned from the unrounded scores; the reported scores are
/// rounded to 2 decimal places.
pub fn analyze_sample(sample: &Sample, standards: &ScoringStandards) -> AnalysisResult {
    let scores = compute_indices(sample, standards);
    let (risk_level, alerts) = classify_risk(scores.wqi, scores.hpi);
    let reported = scores.rounded();

    debug!(
        village = %sample.name,
        wqi = reported.wqi,
        hpi = reported.hpi,
        risk = %risk_level,
        "Sample scored"
    );

    AnalysisResult {
        name: sample.name.clone(),
        wqi: reported.wqi,
        hpi: reported.hpi,
        risk_level,
        alerts,
    }
}

/// Score a batch. Exactly one result per sample, in input order.
pub fn analyze(samples: &[Sample], standards: &ScoringStandards) -> Vec<AnalysisResult> {
    let results: Vec<AnalysisResult> = samples
        .iter()
        .map(|s| analyze_sample(s, standards))
        .collect();

    let summary = BatchSummary::from_results(&results);
    if let Some(worst) = summary.worst() {
        info!(
            samples = summary.total,
            unsafe_count = summary.unsafe_count,
            worst = %worst,
            "Batch analyzed"
        );
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskLevel;

    #[test]
    fn test_reference_sample_is_poor() {
        let sample = Sample {
            ph: 7.2,
            turbidity: 5.0,
            lead: 0.01,
            arsenic: 0.005,
            fluoride: 0.8,
            bod: 2.0,
            ..Sample::named("Rampur")
        };
        let result = analyze_sample(&sample, &ScoringStandards::default());
        assert_eq!(result.name, "Rampur");
        assert_eq!(result.wqi, 63.57);
        assert_eq!(result.hpi, 75.0);
        assert_eq!(result.risk_level, RiskLevel::Poor);
        assert_eq!(result.alerts, vec!["Needs treatment"]);
    }

    #[test]
    fn test_tier_uses_unrounded_scores() {
        // HPI = 100.004 reports as 100.0 but is still above the unfit line.
        let sample = Sample {
            lead: 0.010_000_4,
            arsenic: 0.010_000_4,
            ..Sample::named("Edge")
        };
        let result = analyze_sample(&sample, &ScoringStandards::default());
        assert_eq!(result.hpi, 100.0);
        assert_eq!(result.risk_level, RiskLevel::Unfit);
    }

    #[test]
    fn test_batch_preserves_order_and_length() {
        let samples = vec![
            Sample {
                lead: 0.05,
                ..Sample::named("first")
            },
            Sample::named("second"),
            Sample {
                ph: 4.0,
                turbidity: 10.0,
                ..Sample::named("third")
            },
            Sample::named("second"),
        ];
        let results = analyze(&samples, &ScoringStandards::default());
        assert_eq!(results.len(), samples.len());
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third", "second"]);
        assert_eq!(results[0].risk_level, RiskLevel::Unfit);
        assert_eq!(results[1].risk_level, RiskLevel::Safe);
    }

    #[test]
    fn test_empty_batch() {
        assert!(analyze(&[], &ScoringStandards::default()).is_empty());
    }

    #[test]
    fn test_alternate_standards_change_outcome() {
        let sample = Sample {
            lead: 0.03,
            ..Sample::named("Borderline")
        };
        let strict = ScoringStandards::default();
        let mut lenient = ScoringStandards::default();
        lenient.limits.lead = 0.1;

        assert_eq!(analyze_sample(&sample, &strict).risk_level, RiskLevel::Unfit);
        assert_eq!(analyze_sample(&sample, &lenient).risk_level, RiskLevel::Safe);
    }
}

//! Weighted aggregation of quality ratings into WQI and HPI

use serde::{Deserialize, Serialize};

use super::quality::ParameterRatings;
use crate::config::ScoringStandards;
use crate::types::Sample;

/// Aggregate scores for one sample. Higher is worse; neither is bounded above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexScores {
    /// Water Quality Index over all six parameters
    pub wqi: f64,
    /// Heavy-metal Pollution Index over lead and arsenic
    pub hpi: f64,
}

impl IndexScores {
    /// Both scores rounded to 2 decimal places, as reported to clients.
    pub fn rounded(self) -> Self {
        Self {
            wqi: round2(self.wqi),
            hpi: round2(self.hpi),
        }
    }
}

/// Compute WQI and HPI for one sample.
///
/// WQI = Σ(wᵢ·qᵢ) / Σwᵢ over pH, turbidity, BOD, lead, arsenic and fluoride.
/// HPI uses the same shape over lead and arsenic only, skipping any metal
/// whose limit is not positive. Either index is 0 when its weight sum is 0.
pub fn compute_indices(sample: &Sample, standards: &ScoringStandards) -> IndexScores {
    let q = ParameterRatings::rate(sample, standards);
    let w = &standards.weights;

    let wqi = weighted_mean([
        (w.ph, q.ph),
        (w.turbidity, q.turbidity),
        (w.bod, q.bod),
        (w.lead, q.lead),
        (w.arsenic, q.arsenic),
        (w.fluoride, q.fluoride),
    ]);

    let limits = &standards.limits;
    let hpi = weighted_mean(
        [
            (limits.lead, w.lead, q.lead),
            (limits.arsenic, w.arsenic, q.arsenic),
        ]
        .into_iter()
        .filter(|(limit, _, _)| *limit > 0.0)
        .map(|(_, weight, rating)| (weight, rating)),
    );

    IndexScores { wqi, hpi }
}

/// Σ(weight·rating) / Σweight, or 0 when the weights sum to 0.
fn weighted_mean(terms: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (weighted, total) = terms
        .into_iter()
        .fold((0.0, 0.0), |(acc, sum), (weight, rating)| {
            (acc + weight * rating, sum + weight)
        });
    if total == 0.0 {
        return 0.0;
    }
    weighted / total
}

/// Round half away from zero to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

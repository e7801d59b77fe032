//! Scored output returned to clients

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Scores and risk tier for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Echoed sample label
    #[serde(rename = "village", alias = "name")]
    pub name: String,
    /// Water Quality Index, rounded to 2 decimal places
    pub wqi: f64,
    /// Heavy-metal Pollution Index, rounded to 2 decimal places
    pub hpi: f64,
    pub risk_level: RiskLevel,
    pub alerts: Vec<String>,
}

/// Per-tier counts for a scored batch, as shown on the dashboard summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub safe: usize,
    pub warning: usize,
    pub poor: usize,
    pub very_poor: usize,
    pub unfit: usize,
    /// Everything above `warning`
    #[serde(rename = "unsafe")]
    pub unsafe_count: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for r in results {
            match r.risk_level {
                RiskLevel::Safe => summary.safe += 1,
                RiskLevel::Warning => summary.warning += 1,
                RiskLevel::Poor => summary.poor += 1,
                RiskLevel::VeryPoor => summary.very_poor += 1,
                RiskLevel::Unfit => summary.unfit += 1,
            }
            if r.risk_level.is_unsafe() {
                summary.unsafe_count += 1;
            }
        }
        summary
    }

    /// Most severe tier present in the batch, if any.
    pub fn worst(&self) -> Option<RiskLevel> {
        [
            (RiskLevel::Unfit, self.unfit),
            (RiskLevel::VeryPoor, self.very_poor),
            (RiskLevel::Poor, self.poor),
            (RiskLevel::Warning, self.warning),
            (RiskLevel::Safe, self.safe),
        ]
        .into_iter()
        .find(|(_, n)| *n > 0)
        .map(|(level, _)| level)
    }
}

/// A scored batch together with its summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub results: Vec<AnalysisResult>,
    pub summary: BatchSummary,
}

impl AnalysisReport {
    pub fn new(results: Vec<AnalysisResult>) -> Self {
        let summary = BatchSummary::from_results(&results);
        Self { results, summary }
    }
}

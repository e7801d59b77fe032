//! Risk tiers assigned from WQI/HPI scores

use serde::{Deserialize, Serialize};

/// Risk tier for a sampled location, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe = 0,
    Warning = 1,
    Poor = 2,
    VeryPoor = 3,
    Unfit = 4,
}

impl RiskLevel {
    /// Wire name (matches the serde representation).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Poor => "poor",
            Self::VeryPoor => "very_poor",
            Self::Unfit => "unfit",
        }
    }

    /// Advisory message attached to results in this tier.
    pub const fn advisory(self) -> &'static str {
        match self {
            Self::Safe => "Safe for consumption",
            Self::Warning => "Acceptable but monitor",
            Self::Poor => "Needs treatment",
            Self::VeryPoor => "Unsafe for consumption",
            Self::Unfit => "Immediate action required",
        }
    }

    /// Tiers the dashboard groups under "Unsafe" (anything above warning).
    pub const fn is_unsafe(self) -> bool {
        matches!(self, Self::Poor | Self::VeryPoor | Self::Unfit)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

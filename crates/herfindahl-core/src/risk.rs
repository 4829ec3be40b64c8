//! Concentration risk levels.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the Low band.
pub const LOW_UPPER: f64 = 0.20;
/// Upper bound (exclusive) of the Medium-Low band.
pub const MEDIUM_LOW_UPPER: f64 = 0.40;
/// Upper bound (exclusive) of the Medium band.
pub const MEDIUM_UPPER: f64 = 0.60;
/// Upper bound (exclusive) of the Medium-High band.
pub const MEDIUM_HIGH_UPPER: f64 = 0.80;

/// Discrete concentration risk level derived from the normalized HHI.
///
/// Variants are ordered from least to most concentrated; `Undefined` sorts last
/// and is used when the normalized index does not exist (a single holding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// HHI* below 0.20
    Low,
    /// HHI* in [0.20, 0.40)
    MediumLow,
    /// HHI* in [0.40, 0.60)
    Medium,
    /// HHI* in [0.60, 0.80)
    MediumHigh,
    /// HHI* at or above 0.80
    High,
    /// HHI* undefined
    Undefined,
}

impl RiskLevel {
    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::MediumLow => "Medium-Low",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
            Self::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maps a normalized HHI to a risk level. NaN maps to [`RiskLevel::Undefined`].
#[must_use]
pub fn classify(hhi_normalized: f64) -> RiskLevel {
    if hhi_normalized.is_nan() {
        RiskLevel::Undefined
    } else if hhi_normalized < LOW_UPPER {
        RiskLevel::Low
    } else if hhi_normalized < MEDIUM_LOW_UPPER {
        RiskLevel::MediumLow
    } else if hhi_normalized < MEDIUM_UPPER {
        RiskLevel::Medium
    } else if hhi_normalized < MEDIUM_HIGH_UPPER {
        RiskLevel::MediumHigh
    } else {
        RiskLevel::High
    }
}

//! Share construction modes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HhiError;

/// Definition of a holding's share for the concentration index.
///
/// Each mode selects the per-row metric that is normalized into shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareMode {
    /// Total value to paid-in multiple
    Tvpi,

    /// Value created: NAV + distributions (most common for concentration)
    #[default]
    Value,

    /// Distributions already returned
    Realized,

    /// Residual NAV
    Unrealized,

    /// Raw invested amount from a two-column layout
    Invested,
}

impl ShareMode {
    /// All modes in canonical order.
    pub const ALL: [ShareMode; 5] = [
        Self::Tvpi,
        Self::Value,
        Self::Realized,
        Self::Unrealized,
        Self::Invested,
    ];

    /// Returns the command-line name of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tvpi => "tvpi",
            Self::Value => "value",
            Self::Realized => "realized",
            Self::Unrealized => "unrealized",
            Self::Invested => "invested",
        }
    }

    /// Returns a human-readable name of the metric being normalized.
    #[must_use]
    pub fn metric_name(&self) -> &'static str {
        match self {
            Self::Tvpi => "TVPI",
            Self::Value => "value created (NAV + Distributions)",
            Self::Realized => "Distributions",
            Self::Unrealized => "NAV",
            Self::Invested => "invested amount",
        }
    }

    /// Comma-separated list of valid mode names.
    #[must_use]
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(ShareMode::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for ShareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShareMode {
    type Err = HhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| HhiError::invalid_mode(s))
    }
}

//! Herfindahl-Hirschman concentration index.
//!
//! For shares `s_i` summing to one over `N` holdings:
//!
//! - `HHI = Σ s_i²`, in `[1/N, 1]`
//! - `HHI* = (HHI - 1/N) / (1 - 1/N)`, in `[0, 1]`, undefined for `N = 1`
//!
//! `HHI*` removes the equidistribution floor so portfolios of different sizes
//! can be compared on the same scale.

use serde::Serialize;
use tracing::debug;

use crate::risk::{classify, RiskLevel};
use crate::shares::ShareVector;

/// Concentration metrics for one share vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConcentrationResult {
    hhi: f64,
    /// NaN when undefined; serialized as `null`.
    hhi_normalized: f64,
    risk_level: RiskLevel,
    holdings: usize,
}

impl ConcentrationResult {
    /// Sum of squared shares.
    #[must_use]
    pub fn hhi(&self) -> f64 {
        self.hhi
    }

    /// Normalized index, `None` when fewer than two holdings.
    #[must_use]
    pub fn hhi_normalized(&self) -> Option<f64> {
        (!self.hhi_normalized.is_nan()).then_some(self.hhi_normalized)
    }

    /// Risk level derived from the normalized index.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// Number of holdings the index was computed over.
    #[must_use]
    pub fn holdings(&self) -> usize {
        self.holdings
    }

    /// Numbers-equivalent: how many equally sized holdings give the same HHI.
    #[must_use]
    pub fn effective_holdings(&self) -> Option<f64> {
        (self.hhi > 0.0).then(|| 1.0 / self.hhi)
    }
}

/// Computes HHI, HHI* and the risk level for a share vector.
#[must_use]
pub fn compute_hhi(shares: &ShareVector) -> ConcentrationResult {
    let n = shares.len();
    let hhi: f64 = shares.iter().map(|s| s * s).sum();

    let hhi_normalized = if n <= 1 {
        f64::NAN
    } else {
        let floor = 1.0 / n as f64;
        ((hhi - floor) / (1.0 - floor)).clamp(0.0, 1.0)
    };

    let risk_level = classify(hhi_normalized);
    debug!(n, hhi, hhi_normalized, %risk_level, "computed concentration");

    ConcentrationResult {
        hhi,
        hhi_normalized,
        risk_level,
        holdings: n,
    }
}

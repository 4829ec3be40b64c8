//! Share construction.
//!
//! Turns a per-row metric into fractional shares that sum to one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HhiError, HhiResult};
use crate::types::{PortfolioRows, PortfolioTable, ShareMode};

/// Non-negative shares, one per row, summing to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareVector(Vec<f64>);

impl ShareVector {
    /// Normalizes raw metrics into shares.
    ///
    /// Metrics whose raw sum overflows are rescaled by the largest metric
    /// first, so any finite input normalizes.
    ///
    /// # Errors
    ///
    /// Returns [`HhiError::NegativeValue`] if any metric is negative,
    /// [`HhiError::NonFiniteMetric`] if any metric is not finite, and
    /// [`HhiError::NonPositiveTotal`] if the metrics do not sum to a strictly
    /// positive value.
    pub fn normalize(metrics: &[f64], metric_name: &str) -> HhiResult<Self> {
        for (row, &value) in metrics.iter().enumerate() {
            if !value.is_finite() {
                return Err(HhiError::non_finite_metric(metric_name, row + 1));
            }
            if value < 0.0 {
                return Err(HhiError::negative_value(metric_name, row + 1, value));
            }
        }

        let largest = metrics.iter().copied().fold(0.0_f64, f64::max);
        if largest <= 0.0 {
            return Err(HhiError::NonPositiveTotal {
                metric: metric_name.to_string(),
                total: metrics.iter().sum(),
            });
        }

        let total: f64 = metrics.iter().sum();
        if total.is_finite() {
            return Ok(Self(metrics.iter().map(|m| m / total).collect()));
        }

        let scaled: Vec<f64> = metrics.iter().map(|m| m / largest).collect();
        let scaled_total: f64 = scaled.iter().sum();
        debug!(metric = metric_name, "raw total overflowed, normalized by largest metric");
        Ok(Self(scaled.iter().map(|s| s / scaled_total).collect()))
    }

    /// Shares in table order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of shares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no shares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over shares in table order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    /// Sum of shares, one up to rounding.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Builds shares from a table under the given mode.
///
/// # Errors
///
/// Returns an error if the table does not satisfy the mode's schema or the
/// metric total is not strictly positive.
pub fn build_shares(table: &PortfolioTable, mode: ShareMode) -> HhiResult<ShareVector> {
    let rows = PortfolioRows::from_table(table, mode)?;
    let shares = ShareVector::normalize(&rows.metrics(), rows.mode().metric_name())?;
    debug!(mode = %mode, rows = shares.len(), "built share vector");
    Ok(shares)
}

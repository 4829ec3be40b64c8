//! Error types for concentration analytics.
//!
//! Every variant here is a validation failure: the input table does not meet
//! the preconditions of the selected share mode. None of them are transient.

use thiserror::Error;

use crate::types::ShareMode;

/// Result type for concentration operations.
pub type HhiResult<T> = Result<T, HhiError>;

/// Errors that can occur while building shares or concentration metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HhiError {
    /// Mode string outside the supported set.
    #[error("Invalid mode '{given}'. Valid modes: {{{}}}", ShareMode::valid_names())]
    InvalidMode {
        /// The rejected mode string.
        given: String,
    },

    /// Columns required by the mode are absent from the table.
    #[error("Mode '{mode}' requires column(s) {}; missing: {}", .required.join(", "), .missing.join(", "))]
    MissingColumns {
        /// The active mode.
        mode: ShareMode,
        /// Columns the mode needs.
        required: Vec<String>,
        /// Columns that were not found.
        missing: Vec<String>,
    },

    /// A needed cell is blank.
    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue {
        /// Column name.
        column: String,
        /// 1-based data row number.
        row: usize,
    },

    /// A needed cell is not a finite number.
    #[error("Invalid number '{raw}' in column '{column}' at row {row}")]
    InvalidNumber {
        /// Column name.
        column: String,
        /// 1-based data row number.
        row: usize,
        /// The raw cell text.
        raw: String,
    },

    /// Capital base is zero or negative.
    #[error("PaidIn must be positive, found {value} at row {row}: TVPI is undefined")]
    NonPositivePaidIn {
        /// 1-based data row number.
        row: usize,
        /// The offending value.
        value: f64,
    },

    /// A share metric is negative.
    #[error("Negative value {value} in column '{column}' at row {row}")]
    NegativeValue {
        /// Column name.
        column: String,
        /// 1-based data row number.
        row: usize,
        /// The offending value.
        value: f64,
    },

    /// A metric derived from finite inputs overflowed.
    #[error("{metric} at row {row} is not finite: inputs are too large or PaidIn too small")]
    NonFiniteMetric {
        /// Name of the derived metric.
        metric: String,
        /// 1-based data row number.
        row: usize,
    },

    /// The metric total cannot be normalized.
    #[error("Sum of {metric} is {total}, must be positive to build shares")]
    NonPositiveTotal {
        /// Name of the metric being summed.
        metric: String,
        /// The computed total.
        total: f64,
    },

    /// The table has no data rows.
    #[error("Portfolio table has no rows")]
    EmptyTable,

    /// Invested layout needs an identifier and an amount column.
    #[error("Mode 'invested' needs at least 2 columns (identifier, amount), found {found}")]
    TooFewColumns {
        /// Number of columns in the table.
        found: usize,
    },
}

impl HhiError {
    /// Create an invalid mode error.
    #[must_use]
    pub fn invalid_mode(given: impl Into<String>) -> Self {
        Self::InvalidMode {
            given: given.into(),
        }
    }

    /// Create a missing columns error.
    #[must_use]
    pub fn missing_columns(mode: ShareMode, required: &[&str], missing: Vec<String>) -> Self {
        Self::MissingColumns {
            mode,
            required: required.iter().map(|c| (*c).to_string()).collect(),
            missing,
        }
    }

    /// Create a missing value error.
    #[must_use]
    pub fn missing_value(column: impl Into<String>, row: usize) -> Self {
        Self::MissingValue {
            column: column.into(),
            row,
        }
    }

    /// Create a non-finite metric error.
    #[must_use]
    pub fn non_finite_metric(metric: impl Into<String>, row: usize) -> Self {
        Self::NonFiniteMetric {
            metric: metric.into(),
            row,
        }
    }

    /// Create a negative value error.
    #[must_use]
    pub fn negative_value(column: impl Into<String>, row: usize, value: f64) -> Self {
        Self::NegativeValue {
            column: column.into(),
            row,
            value,
        }
    }
}

//! Typed row schemas, one per share mode.
//!
//! A [`PortfolioTable`] is validated once against the schema of the selected
//! [`ShareMode`]. After that point every row carries exactly the fields its
//! mode needs, already parsed and checked, so share construction never has to
//! ask whether a column exists.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::mode::ShareMode;
use super::table::{columns, PortfolioTable};
use crate::error::{HhiError, HhiResult};

/// A row that contributes a single non-negative metric to the share vector.
pub trait ShareMetric {
    /// The raw metric normalized into shares.
    fn metric(&self) -> f64;
}

/// Row for `tvpi` mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TvpiRow {
    /// Supplied or derived TVPI multiple.
    pub tvpi: f64,
}

/// Row for `value` mode (and TVPI derivation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRow {
    /// Capital invested, strictly positive.
    pub paid_in: f64,
    /// Net asset value.
    pub nav: f64,
    /// Cash returned, zero when the column is absent.
    pub distributions: f64,
}

impl ValueRow {
    /// Total value: NAV plus distributions.
    #[must_use]
    pub fn value_created(&self) -> f64 {
        self.nav + self.distributions
    }

    /// Total value to paid-in multiple.
    #[must_use]
    pub fn tvpi(&self) -> f64 {
        self.value_created() / self.paid_in
    }
}

/// Row for `realized` mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealizedRow {
    /// Cash returned.
    pub distributions: f64,
}

/// Row for `unrealized` mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnrealizedRow {
    /// Net asset value.
    pub nav: f64,
}

/// Row for `invested` mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestedRow {
    /// Amount invested.
    pub amount: f64,
}

impl ShareMetric for TvpiRow {
    fn metric(&self) -> f64 {
        self.tvpi
    }
}

impl ShareMetric for ValueRow {
    fn metric(&self) -> f64 {
        // Equivalent to TVPI * PaidIn without the round trip through division.
        self.value_created()
    }
}

impl ShareMetric for RealizedRow {
    fn metric(&self) -> f64 {
        self.distributions
    }
}

impl ShareMetric for UnrealizedRow {
    fn metric(&self) -> f64 {
        self.nav
    }
}

impl ShareMetric for InvestedRow {
    fn metric(&self) -> f64 {
        self.amount
    }
}

/// Portfolio rows validated against the schema of one share mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PortfolioRows {
    /// TVPI multiples.
    Tvpi(Vec<TvpiRow>),
    /// Paid-in, NAV and distributions.
    Value(Vec<ValueRow>),
    /// Distributions only.
    Realized(Vec<RealizedRow>),
    /// NAV only.
    Unrealized(Vec<UnrealizedRow>),
    /// Invested amounts.
    Invested(Vec<InvestedRow>),
}

impl PortfolioRows {
    /// Validates `table` against the schema of `mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required column is absent, a needed cell is blank
    /// or not a finite number, a metric is negative, `PaidIn` is not positive
    /// where it is needed, or the table has no rows.
    pub fn from_table(table: &PortfolioTable, mode: ShareMode) -> HhiResult<Self> {
        let rows = match mode {
            ShareMode::Tvpi => Self::Tvpi(tvpi_rows(table)?),
            ShareMode::Value => Self::Value(performance_rows(table, mode)?),
            ShareMode::Realized => {
                let col = require_columns(table, mode, &[columns::DISTRIBUTIONS])?[0];
                Self::Realized(
                    (0..table.len())
                        .map(|row| {
                            non_negative_cell(table, row, col)
                                .map(|distributions| RealizedRow { distributions })
                        })
                        .collect::<HhiResult<_>>()?,
                )
            }
            ShareMode::Unrealized => {
                let col = require_columns(table, mode, &[columns::NAV])?[0];
                Self::Unrealized(
                    (0..table.len())
                        .map(|row| non_negative_cell(table, row, col).map(|nav| UnrealizedRow { nav }))
                        .collect::<HhiResult<_>>()?,
                )
            }
            ShareMode::Invested => {
                let col = invested_column(table)?;
                debug!(column = %table.headers()[col], "resolved invested amount column");
                Self::Invested(
                    (0..table.len())
                        .map(|row| non_negative_cell(table, row, col).map(|amount| InvestedRow { amount }))
                        .collect::<HhiResult<_>>()?,
                )
            }
        };

        if rows.is_empty() {
            return Err(HhiError::EmptyTable);
        }
        Ok(rows)
    }

    /// The mode these rows were validated for.
    #[must_use]
    pub fn mode(&self) -> ShareMode {
        match self {
            Self::Tvpi(_) => ShareMode::Tvpi,
            Self::Value(_) => ShareMode::Value,
            Self::Realized(_) => ShareMode::Realized,
            Self::Unrealized(_) => ShareMode::Unrealized,
            Self::Invested(_) => ShareMode::Invested,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Tvpi(rows) => rows.len(),
            Self::Value(rows) => rows.len(),
            Self::Realized(rows) => rows.len(),
            Self::Unrealized(rows) => rows.len(),
            Self::Invested(rows) => rows.len(),
        }
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw metric per row, in table order.
    #[must_use]
    pub fn metrics(&self) -> Vec<f64> {
        fn collect<R: ShareMetric>(rows: &[R]) -> Vec<f64> {
            rows.iter().map(ShareMetric::metric).collect()
        }

        match self {
            Self::Tvpi(rows) => collect(rows),
            Self::Value(rows) => collect(rows),
            Self::Realized(rows) => collect(rows),
            Self::Unrealized(rows) => collect(rows),
            Self::Invested(rows) => collect(rows),
        }
    }
}

/// Resolves the amount column of the invested layout.
///
/// The first recognized amount header wins; otherwise the second column is used.
///
/// # Errors
///
/// Returns [`HhiError::TooFewColumns`] if the table has fewer than two columns.
pub fn invested_column(table: &PortfolioTable) -> HhiResult<usize> {
    if let Some(col) = columns::INVESTED_ALIASES
        .iter()
        .find_map(|alias| table.column_index(alias))
    {
        return Ok(col);
    }
    if table.column_count() < 2 {
        return Err(HhiError::TooFewColumns {
            found: table.column_count(),
        });
    }
    Ok(1)
}

/// TVPI rows: the supplied column when complete, otherwise derived.
fn tvpi_rows(table: &PortfolioTable) -> HhiResult<Vec<TvpiRow>> {
    if let Some(col) = table
        .column_index(columns::TVPI)
        .filter(|&col| table.column_is_complete(col))
    {
        debug!("using supplied TVPI column");
        return (0..table.len())
            .map(|row| non_negative_cell(table, row, col).map(|tvpi| TvpiRow { tvpi }))
            .collect();
    }

    debug!("deriving TVPI from PaidIn, NAV and Distributions");
    performance_rows(table, ShareMode::Tvpi)?
        .iter()
        .enumerate()
        .map(|(row, r)| {
            let tvpi = r.tvpi();
            if tvpi.is_finite() {
                Ok(TvpiRow { tvpi })
            } else {
                Err(HhiError::non_finite_metric(columns::TVPI, row + 1))
            }
        })
        .collect()
}

/// Paid-in, NAV and distributions rows; `Distributions` defaults to zero when absent.
///
/// NAV plus distributions must stay finite.
fn performance_rows(table: &PortfolioTable, mode: ShareMode) -> HhiResult<Vec<ValueRow>> {
    let cols = require_columns(table, mode, &[columns::PAID_IN, columns::NAV])?;
    let (paid_in_col, nav_col) = (cols[0], cols[1]);
    let distributions_col = table.column_index(columns::DISTRIBUTIONS);

    (0..table.len())
        .map(|row| {
            let paid_in = table.required_number(row, paid_in_col)?;
            if paid_in <= 0.0 {
                return Err(HhiError::NonPositivePaidIn {
                    row: row + 1,
                    value: paid_in,
                });
            }
            let nav = non_negative_cell(table, row, nav_col)?;
            let distributions = match distributions_col {
                Some(col) => non_negative_cell(table, row, col)?,
                None => 0.0,
            };
            let value = ValueRow {
                paid_in,
                nav,
                distributions,
            };
            if !value.value_created().is_finite() {
                return Err(HhiError::non_finite_metric(
                    ShareMode::Value.metric_name(),
                    row + 1,
                ));
            }
            Ok(value)
        })
        .collect()
}

fn require_columns(
    table: &PortfolioTable,
    mode: ShareMode,
    names: &[&str],
) -> HhiResult<Vec<usize>> {
    let missing: Vec<String> = names
        .iter()
        .filter(|name| !table.has_column(name))
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(HhiError::missing_columns(mode, names, missing));
    }
    Ok(names.iter().filter_map(|name| table.column_index(name)).collect())
}

fn non_negative_cell(table: &PortfolioTable, row: usize, col: usize) -> HhiResult<f64> {
    let value = table.required_number(row, col)?;
    if value < 0.0 {
        return Err(HhiError::negative_value(
            table.headers()[col].clone(),
            row + 1,
            value,
        ));
    }
    Ok(value)
}

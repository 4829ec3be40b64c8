//! In-memory portfolio table.

use serde::{Deserialize, Serialize};

use crate::error::{HhiError, HhiResult};

/// Well-known column names of the performance layouts.
pub mod columns {
    /// Default identifier column.
    pub const DEAL: &str = "Deal";
    /// Cumulative capital invested.
    pub const PAID_IN: &str = "PaidIn";
    /// Net asset value.
    pub const NAV: &str = "NAV";
    /// Cumulative cash returned.
    pub const DISTRIBUTIONS: &str = "Distributions";
    /// Total value to paid-in multiple.
    pub const TVPI: &str = "TVPI";
    /// Derived NAV + Distributions column in value mode reports.
    pub const VALUE_CREATED: &str = "ValueCreated";
    /// Amount column names recognized by the invested layout, in priority order.
    pub const INVESTED_ALIASES: [&str; 4] = ["Investito", "Invested", "Amount", "Importo"];
}

/// A tabular portfolio: ordered headers and ordered rows of raw cells.
///
/// Cells are kept as text and parsed on demand, so a column that a mode does
/// not use can hold anything without failing the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PortfolioTable {
    /// Creates a table, trimming headers and cells.
    ///
    /// Short rows are padded with blank cells so every row has one cell per header.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut cells: Vec<String> = row.into_iter().map(|c| c.trim().to_string()).collect();
                cells.resize(width, String::new());
                cells
            })
            .collect();
        Self { headers, rows }
    }

    /// Convenience constructor from string slices.
    #[must_use]
    pub fn from_str_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    /// Column headers in file order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of a column by exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Returns true if the column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Returns the cell text, or `None` when the cell is blank or out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    /// Returns true if every cell of the column is filled.
    #[must_use]
    pub fn column_is_complete(&self, col: usize) -> bool {
        (0..self.len()).all(|row| self.cell(row, col).is_some())
    }

    /// Parses a cell as a finite number; blank cells yield `Ok(None)`.
    pub fn number(&self, row: usize, col: usize) -> HhiResult<Option<f64>> {
        let Some(raw) = self.cell(row, col) else {
            return Ok(None);
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(HhiError::InvalidNumber {
                column: self.headers[col].clone(),
                row: row + 1,
                raw: raw.to_string(),
            }),
        }
    }

    /// Parses a cell that must be present.
    pub fn required_number(&self, row: usize, col: usize) -> HhiResult<f64> {
        self.number(row, col)?
            .ok_or_else(|| HhiError::missing_value(self.headers[col].clone(), row + 1))
    }

    /// Parses a cell leniently for display: blank or unparseable cells yield `None`.
    #[must_use]
    pub fn display_number(&self, row: usize, col: usize) -> Option<f64> {
        self.number(row, col).ok().flatten()
    }
}

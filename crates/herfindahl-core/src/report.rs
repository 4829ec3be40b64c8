//! Ranked detail tables for concentration reports.

use serde::Serialize;

use crate::concentration::ConcentrationResult;
use crate::shares::ShareVector;
use crate::types::{columns, invested_column, PortfolioTable, ShareMode};

/// Header of the share column.
pub const SHARE_HEADER: &str = "Share";
/// Header of the squared share column.
pub const SHARE_SQUARED_HEADER: &str = "Share^2";

/// One ranked holding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    /// Display identifier (not necessarily unique).
    pub id: String,
    /// Share of the total metric.
    pub share: f64,
    /// Squared share: this holding's contribution to HHI.
    pub share_squared: f64,
    /// Raw contributing values, aligned with [`DetailTable::value_columns`].
    pub values: Vec<Option<f64>>,
}

/// Detail rows ranked by share descending, ties kept in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailTable {
    /// Header of the identifier column.
    pub id_header: String,
    /// Headers of the raw contributing columns.
    pub value_columns: Vec<String>,
    /// Ranked rows.
    pub rows: Vec<DetailRow>,
}

impl DetailTable {
    /// Builds the ranked detail table.
    ///
    /// The identifier comes from `id_col` when present. In invested mode the
    /// first column stands in for a missing `id_col`; otherwise rows are
    /// numbered from 1.
    #[must_use]
    pub fn build(
        table: &PortfolioTable,
        shares: &ShareVector,
        mode: ShareMode,
        id_col: &str,
    ) -> Self {
        let (id_header, id_index) = match table.column_index(id_col) {
            Some(idx) => (id_col.to_string(), Some(idx)),
            None if mode == ShareMode::Invested && table.column_count() > 0 => {
                (table.headers()[0].clone(), Some(0))
            }
            None => (id_col.to_string(), None),
        };

        let sources = value_sources(table, mode, id_index);
        let value_columns = sources.iter().map(|s| s.header().to_string()).collect();

        let mut rows: Vec<DetailRow> = shares
            .iter()
            .enumerate()
            .map(|(row, &share)| DetailRow {
                id: match id_index {
                    Some(col) => table.cell(row, col).unwrap_or_default().to_string(),
                    None => (row + 1).to_string(),
                },
                share,
                share_squared: share * share,
                values: sources.iter().map(|s| s.value(table, row)).collect(),
            })
            .collect();

        // Stable: equal shares keep table order.
        rows.sort_by(|a, b| b.share.total_cmp(&a.share));

        Self {
            id_header,
            value_columns,
            rows,
        }
    }

    /// All headers in output order.
    #[must_use]
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![
            self.id_header.clone(),
            SHARE_HEADER.to_string(),
            SHARE_SQUARED_HEADER.to_string(),
        ];
        headers.extend(self.value_columns.iter().cloned());
        headers
    }

    /// The first `n` ranked rows.
    #[must_use]
    pub fn top(&self, n: usize) -> &[DetailRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Where a raw detail column comes from.
enum ValueSource {
    Column { header: String, index: usize },
    ValueCreated { nav: usize, distributions: Option<usize> },
}

impl ValueSource {
    fn header(&self) -> &str {
        match self {
            Self::Column { header, .. } => header,
            Self::ValueCreated { .. } => columns::VALUE_CREATED,
        }
    }

    fn value(&self, table: &PortfolioTable, row: usize) -> Option<f64> {
        match *self {
            Self::Column { index, .. } => table.display_number(row, index),
            Self::ValueCreated { nav, distributions } => {
                let nav = table.display_number(row, nav)?;
                let distributions = match distributions {
                    Some(col) => table.display_number(row, col)?,
                    None => 0.0,
                };
                Some(nav + distributions)
            }
        }
    }
}

/// Raw columns shown next to the shares; the identifier column is never repeated.
fn value_sources(
    table: &PortfolioTable,
    mode: ShareMode,
    id_index: Option<usize>,
) -> Vec<ValueSource> {
    let column = |index: usize| ValueSource::Column {
        header: table.headers()[index].clone(),
        index,
    };

    if mode == ShareMode::Invested {
        return invested_column(table)
            .ok()
            .filter(|&index| Some(index) != id_index)
            .map(column)
            .into_iter()
            .collect();
    }

    let mut sources: Vec<ValueSource> = [
        columns::TVPI,
        columns::PAID_IN,
        columns::NAV,
        columns::DISTRIBUTIONS,
    ]
    .iter()
    .filter_map(|name| table.column_index(name))
    .filter(|&index| Some(index) != id_index)
    .map(column)
    .collect();

    if mode == ShareMode::Value {
        if let Some(nav) = table.column_index(columns::NAV) {
            sources.push(ValueSource::ValueCreated {
                nav,
                distributions: table.column_index(columns::DISTRIBUTIONS),
            });
        }
    }
    sources
}

/// Everything a run produces: mode, scalar metrics and the ranked detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcentrationReport {
    /// Share mode used.
    pub mode: ShareMode,
    /// Scalar concentration metrics.
    pub result: ConcentrationResult,
    /// Ranked per-holding detail.
    pub detail: DetailTable,
}

impl ConcentrationReport {
    /// Assembles a report from the pipeline outputs.
    #[must_use]
    pub fn build(
        table: &PortfolioTable,
        shares: &ShareVector,
        result: ConcentrationResult,
        mode: ShareMode,
        id_col: &str,
    ) -> Self {
        Self {
            mode,
            result,
            detail: DetailTable::build(table, shares, mode, id_col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shares::build_shares;

    fn scenario_table() -> PortfolioTable {
        PortfolioTable::from_str_rows(
            &["Deal", "PaidIn", "NAV", "Distributions"],
            &[
                &["Gamma", "5000000", "6000000", "0"],
                &["Alpha", "10000000", "12000000", "3000000"],
                &["Beta", "8000000", "7500000", "1500000"],
            ],
        )
    }

    #[test]
    fn test_value_mode_columns_and_ranking() {
        let table = scenario_table();
        let shares = build_shares(&table, ShareMode::Value).unwrap();
        let detail = DetailTable::build(&table, &shares, ShareMode::Value, "Deal");

        assert_eq!(
            detail.headers(),
            vec![
                "Deal",
                "Share",
                "Share^2",
                "PaidIn",
                "NAV",
                "Distributions",
                "ValueCreated"
            ]
        );
        let ids: Vec<&str> = detail.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(detail.rows[0].values[3], Some(15_000_000.0));
    }

    #[test]
    fn test_sequential_id_fallback() {
        let table = PortfolioTable::from_str_rows(&["NAV"], &[&["1"], &["3"]]);
        let shares = build_shares(&table, ShareMode::Unrealized).unwrap();
        let detail = DetailTable::build(&table, &shares, ShareMode::Unrealized, "Deal");
        assert_eq!(detail.id_header, "Deal");
        assert_eq!(detail.rows[0].id, "2");
        assert_eq!(detail.rows[1].id, "1");
    }

    #[test]
    fn test_ties_keep_table_order() {
        let table = PortfolioTable::from_str_rows(
            &["Deal", "NAV"],
            &[&["A", "1"], &["B", "2"], &["C", "1"], &["D", "2"]],
        );
        let shares = build_shares(&table, ShareMode::Unrealized).unwrap();
        let detail = DetailTable::build(&table, &shares, ShareMode::Unrealized, "Deal");
        let ids: Vec<&str> = detail.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_invested_layout() {
        let table = PortfolioTable::from_str_rows(
            &["Società", "Investito"],
            &[&["Uno", "100"], &["Due", "300"]],
        );
        let shares = build_shares(&table, ShareMode::Invested).unwrap();
        let detail = DetailTable::build(&table, &shares, ShareMode::Invested, "Deal");
        assert_eq!(detail.headers(), vec!["Società", "Share", "Share^2", "Investito"]);
        assert_eq!(detail.rows[0].id, "Due");
        assert_eq!(detail.rows[0].values, vec![Some(300.0)]);
    }

    #[test]
    fn test_identifier_column_not_repeated() {
        let table = PortfolioTable::from_str_rows(
            &["PaidIn", "NAV"],
            &[&["10", "1"], &["10", "3"]],
        );
        let shares = build_shares(&table, ShareMode::Value).unwrap();
        let detail = DetailTable::build(&table, &shares, ShareMode::Value, "NAV");
        assert_eq!(
            detail.headers(),
            vec!["NAV", "Share", "Share^2", "PaidIn", "ValueCreated"]
        );
        assert_eq!(detail.rows[0].id, "3");
        assert_eq!(detail.rows[0].values, vec![Some(10.0), Some(3.0)]);
    }

    #[test]
    fn test_blank_identifier_and_top() {
        let table = PortfolioTable::from_str_rows(
            &["Deal", "NAV"],
            &[&["", "5"], &["A", "1"], &["A", "1"]],
        );
        let shares = build_shares(&table, ShareMode::Unrealized).unwrap();
        let detail = DetailTable::build(&table, &shares, ShareMode::Unrealized, "Deal");
        assert_eq!(detail.rows[0].id, "");
        assert_eq!(detail.top(2).len(), 2);
        assert_eq!(detail.top(10).len(), 3);
    }
}

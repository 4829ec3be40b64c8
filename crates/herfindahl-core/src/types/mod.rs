//! Domain types for concentration analytics.
//!
//! - [`PortfolioTable`]: Raw tabular input, one row per holding
//! - [`ShareMode`]: Which metric defines a holding's share
//! - [`PortfolioRows`]: Rows validated against the schema of one mode

mod mode;
mod rows;
mod table;

pub use mode::ShareMode;
pub use rows::{
    invested_column, InvestedRow, PortfolioRows, RealizedRow, ShareMetric, TvpiRow, UnrealizedRow,
    ValueRow,
};
pub use table::{columns, PortfolioTable};

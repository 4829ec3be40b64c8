//! # Herfindahl Ext File
//!
//! File-based input and output for the Herfindahl concentration engine:
//! - CSV portfolio loading into [`herfindahl_core::PortfolioTable`]
//! - CSV export of ranked [`herfindahl_core::DetailTable`]s
//!
//! Files are assumed local and stable, so nothing is retried: every failure is
//! reported once with the offending path.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod reader;
mod writer;

pub use error::{FileError, FileResult};
pub use reader::{load_portfolio_table, read_portfolio_table};
pub use writer::{write_detail_csv, write_detail_to};

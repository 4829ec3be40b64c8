//! # Herfindahl Core
//!
//! Concentration analytics for private capital portfolios.
//!
//! The crate measures how concentrated a portfolio is with the
//! Herfindahl-Hirschman Index (HHI) computed over per-holding shares, where a
//! share can be defined by TVPI, value created, realized proceeds, unrealized
//! value, or raw invested amount.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Typed schemas**: A table is validated once per mode into [`PortfolioRows`]
//! - **No silent exclusion**: A row that cannot contribute fails the whole run
//!
//! ## Pipeline
//!
//! ```rust
//! use herfindahl_core::prelude::*;
//!
//! let table = PortfolioTable::from_str_rows(
//!     &["Deal", "PaidIn", "NAV", "Distributions"],
//!     &[
//!         &["Alpha", "10000000", "12000000", "3000000"],
//!         &["Beta", "8000000", "7500000", "1500000"],
//!         &["Gamma", "5000000", "6000000", "0"],
//!     ],
//! );
//!
//! let shares = build_shares(&table, ShareMode::Value).unwrap();
//! let result = compute_hhi(&shares);
//! assert!((result.hhi() - 0.38).abs() < 1e-12);
//! assert_eq!(result.risk_level(), RiskLevel::Low);
//!
//! let report = ConcentrationReport::build(&table, &shares, result, ShareMode::Value, "Deal");
//! assert_eq!(report.detail.rows[0].id, "Alpha");
//! ```
//!
//! ## Module Overview
//!
//! - [`types`] - Tables, share modes and per-mode row schemas
//! - [`shares`] - Share normalization
//! - [`concentration`] - HHI and normalized HHI*
//! - [`risk`] - Risk level thresholds and classification
//! - [`report`] - Ranked detail tables

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod concentration;
pub mod error;
pub mod report;
pub mod risk;
pub mod shares;
pub mod types;

pub use error::{HhiError, HhiResult};

pub use concentration::{compute_hhi, ConcentrationResult};
pub use report::{ConcentrationReport, DetailRow, DetailTable};
pub use risk::{classify, RiskLevel};
pub use shares::{build_shares, ShareVector};
pub use types::{PortfolioRows, PortfolioTable, ShareMode};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::concentration::{compute_hhi, ConcentrationResult};
    pub use crate::error::{HhiError, HhiResult};
    pub use crate::report::{ConcentrationReport, DetailRow, DetailTable};
    pub use crate::risk::{classify, RiskLevel};
    pub use crate::shares::{build_shares, ShareVector};
    pub use crate::types::{columns, PortfolioRows, PortfolioTable, ShareMode};
}

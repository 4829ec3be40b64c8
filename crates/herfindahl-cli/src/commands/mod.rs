//! CLI command implementations.

pub mod concentration;

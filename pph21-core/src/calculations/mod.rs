//! PPh 21 calculators.
//!
//! The forward calculator turns a net yearly income into the tax owed; the
//! inverse calculator recovers the income behind a known tax figure. Both
//! resolve the regulation tables for the requested year and apply the
//! progressive schedule bracket by bracket.

pub mod common;
pub mod income;
pub mod tax;

pub use income::calculate_income;
pub use tax::calculate_tax;

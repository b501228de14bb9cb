//! Reference tables and calculators for Indonesia's PPh 21 earned-income
//! tax.
//!
//! The crate carries the regulation history as compiled-in tables: the
//! progressive rate schedules per income tax law and the PTKP (non-taxable
//! income) constants per ministerial decree, both keyed by year. On top of
//! those sit two pure calculators: tax owed given a net yearly income, and
//! its exact inverse, income given tax paid.
//!
//! Querying a year outside the known history is an expected usage pattern
//! and yields [`Pph21Error::UnsupportedYear`] rather than a guess, so
//! callers can probe the supported range.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pph21_core::{TaxpayerStatus, calculate_income, calculate_tax};
//!
//! // Married, two dependents: PTKP is 67_500_000 in 2022, so 52_500_000
//! // of a 120M income is taxable, all of it inside the 5% bracket.
//! let tax = calculate_tax(2022, TaxpayerStatus::K2, dec!(120_000_000)).unwrap();
//! assert_eq!(tax, dec!(2_625_000));
//!
//! // The inverse recovers the income exactly.
//! let income = calculate_income(2022, TaxpayerStatus::K2, tax, false).unwrap();
//! assert_eq!(income, dec!(120_000_000));
//! ```

pub mod calculations;
pub mod error;
pub mod models;
pub mod tables;

pub use calculations::{calculate_income, calculate_tax};
pub use error::Pph21Error;
pub use models::{PtkpTable, TaxBracket, TaxpayerStatus};
pub use tables::{
    EARLIEST_SUPPORTED_YEAR, LATEST_SUPPORTED_YEAR, ptkp_for_year, rates_for_year,
};

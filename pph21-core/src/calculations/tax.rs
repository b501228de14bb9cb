//! Forward PPh 21 calculation: tax owed on a net yearly income.
//!
//! The net income is reduced by the taxpayer's PTKP threshold and the
//! remainder is run through the progressive rate schedule effective for the
//! requested year. Each bracket taxes only the slice of income that falls
//! inside it, so the result is continuous across bracket boundaries.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pph21_core::{TaxpayerStatus, calculate_tax};
//!
//! // 2015: PTKP for K/2 is 45_000_000, leaving 255_000_000 taxable.
//! // 50M at 5% + 200M at 15% + 5M at 25% = 33_750_000.
//! let tax = calculate_tax(2015, TaxpayerStatus::K2, dec!(300_000_000)).unwrap();
//! assert_eq!(tax, dec!(33_750_000));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::Pph21Error;
use crate::models::{TaxBracket, TaxpayerStatus};
use crate::tables::{ptkp_for_year, rates_for_year};

/// Yearly PPh 21 owed on `net_yearly_income` for `status` in `year`.
///
/// Income at or below the PTKP threshold owes nothing, and the rate table
/// is not consulted in that case. A year with PTKP history but no rate
/// schedule therefore still answers zero for below-threshold earners.
///
/// # Errors
///
/// [`Pph21Error::InvalidArgument`] for a negative income, and
/// [`Pph21Error::UnsupportedYear`] when the year falls outside the history
/// of whichever table the calculation needs.
pub fn calculate_tax(
    year: i32,
    status: TaxpayerStatus,
    net_yearly_income: Decimal,
) -> Result<Decimal, Pph21Error> {
    if net_yearly_income < Decimal::ZERO {
        return Err(Pph21Error::InvalidArgument(format!(
            "net yearly income must be non-negative, got {net_yearly_income}"
        )));
    }

    let ptkp = ptkp_for_year(year)?;
    let taxable = net_yearly_income - ptkp.amount(status);
    if taxable <= Decimal::ZERO {
        debug!(year, status = %status, "income at or below PTKP; no tax due");
        return Ok(Decimal::ZERO);
    }

    let brackets = rates_for_year(year)?;
    Ok(tax_on(&brackets, taxable))
}

/// Progressive tax on a taxable amount.
///
/// A schedule partitions `[0, ∞)` with an open-ended last bracket, so any
/// positive amount lands in exactly one bracket; the tax below that bracket
/// is carried in `base_tax` and only the marginal slice is taxed at the
/// bracket's own rate. Non-positive amounts owe nothing.
pub(crate) fn tax_on(brackets: &[TaxBracket], taxable: Decimal) -> Decimal {
    brackets
        .iter()
        .find(|bracket| {
            taxable > bracket.min_income && bracket.max_income.is_none_or(|max| taxable <= max)
        })
        .map(|bracket| bracket.base_tax + (taxable - bracket.min_income) * bracket.rate)
        .unwrap_or(Decimal::ZERO)
}

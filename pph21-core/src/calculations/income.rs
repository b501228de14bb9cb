//! Inverse PPh 21 calculation: the net income behind a known tax figure.
//!
//! Runs the progressive schedule in reverse. Each bounded bracket can absorb
//! at most `width * rate` of tax; the paid amount is matched against those
//! capacities to find the bracket it ends in, and the marginal formula is
//! inverted inside that bracket.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pph21_core::{TaxpayerStatus, calculate_income};
//!
//! // Zero tax places the earner exactly at the PTKP threshold.
//! let yearly = calculate_income(2016, TaxpayerStatus::Tk0, dec!(0), false).unwrap();
//! assert_eq!(yearly, dec!(54_000_000));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_rupiah;
use crate::error::Pph21Error;
use crate::models::{TaxBracket, TaxpayerStatus};
use crate::tables::{ptkp_for_year, rates_for_year};

/// Net income that produces `tax_paid` for `status` in `year`.
///
/// The yearly figure is the exact algebraic inverse of
/// [`calculate_tax`](crate::calculations::calculate_tax): feeding it back
/// through the forward calculator returns `tax_paid`. With `monthly` the
/// yearly figure is divided by 12 and rounded half-up to whole rupiah; the
/// statute gives no rounding rule for monthly figures, so half-up to the
/// smallest currency unit is used.
///
/// # Errors
///
/// [`Pph21Error::InvalidArgument`] for a negative tax amount, and
/// [`Pph21Error::UnsupportedYear`] when either table lacks the year.
pub fn calculate_income(
    year: i32,
    status: TaxpayerStatus,
    tax_paid: Decimal,
    monthly: bool,
) -> Result<Decimal, Pph21Error> {
    if tax_paid < Decimal::ZERO {
        return Err(Pph21Error::InvalidArgument(format!(
            "tax paid must be non-negative, got {tax_paid}"
        )));
    }

    let ptkp = ptkp_for_year(year)?;
    let brackets = rates_for_year(year)?;

    let yearly = ptkp.amount(status) + taxable_for(&brackets, tax_paid);
    if monthly {
        Ok(round_rupiah(yearly / Decimal::from(12)))
    } else {
        Ok(yearly)
    }
}

/// Taxable amount whose progressive tax equals `tax`.
///
/// Picks the first bracket whose cumulative capacity covers `tax` and
/// inverts the marginal formula inside it. Exact inverse of
/// [`tax_on`](crate::calculations::tax::tax_on); zero tax maps to zero
/// taxable income.
fn taxable_for(brackets: &[TaxBracket], tax: Decimal) -> Decimal {
    brackets
        .iter()
        .find(|bracket| match bracket.max_income {
            Some(max) => tax <= bracket.base_tax + (max - bracket.min_income) * bracket.rate,
            None => true,
        })
        .map(|bracket| bracket.min_income + (tax - bracket.base_tax) / bracket.rate)
        .unwrap_or(Decimal::ZERO)
}

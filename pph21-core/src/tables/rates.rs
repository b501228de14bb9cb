use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use tracing::trace;

use crate::error::Pph21Error;
use crate::models::TaxBracket;
use crate::tables::{LATEST_SUPPORTED_YEAR, unsupported};

struct RateSchedule {
    years: RangeInclusive<i32>,
    build: fn() -> Vec<TaxBracket>,
}

/// Rate history for individual taxpayers, oldest law first.
static SCHEDULES: [RateSchedule; 3] = [
    RateSchedule {
        years: 2000..=2008,
        build: uu_17_2000,
    },
    RateSchedule {
        years: 2009..=2021,
        build: uu_36_2008,
    },
    RateSchedule {
        years: 2022..=LATEST_SUPPORTED_YEAR,
        build: uu_hpp_2021,
    },
];

/// Progressive brackets effective for `year`, sorted ascending by
/// `min_income`.
///
/// Only years covered by a known law are answered. Anything else yields
/// [`Pph21Error::UnsupportedYear`] so callers can distinguish "out of
/// history" from a real figure.
pub fn rates_for_year(year: i32) -> Result<Vec<TaxBracket>, Pph21Error> {
    let schedule = SCHEDULES
        .iter()
        .find(|s| s.years.contains(&year))
        .ok_or_else(|| unsupported(year))?;
    trace!(year, effective = *schedule.years.start(), "resolved rate schedule");
    Ok((schedule.build)())
}

fn uu_17_2000() -> Vec<TaxBracket> {
    progressive(&[
        (Some(25_000_000), 5),
        (Some(50_000_000), 10),
        (Some(100_000_000), 15),
        (Some(200_000_000), 25),
        (None, 35),
    ])
}

fn uu_36_2008() -> Vec<TaxBracket> {
    progressive(&[
        (Some(50_000_000), 5),
        (Some(250_000_000), 15),
        (Some(500_000_000), 25),
        (None, 30),
    ])
}

fn uu_hpp_2021() -> Vec<TaxBracket> {
    progressive(&[
        (Some(60_000_000), 5),
        (Some(250_000_000), 15),
        (Some(500_000_000), 25),
        (Some(5_000_000_000), 30),
        (None, 35),
    ])
}

/// Builds a contiguous schedule from `(upper bound, rate in percent)`
/// slices; the final slice must be open-ended. `base_tax` accumulates across
/// slices so each bracket can be applied in isolation.
fn progressive(slices: &[(Option<i64>, i64)]) -> Vec<TaxBracket> {
    let mut brackets = Vec::with_capacity(slices.len());
    let mut lower = Decimal::ZERO;
    let mut base_tax = Decimal::ZERO;
    for &(upper, rate_pct) in slices {
        let rate = Decimal::new(rate_pct, 2);
        let max_income = upper.map(Decimal::from);
        brackets.push(TaxBracket {
            min_income: lower,
            max_income,
            rate,
            base_tax,
        });
        if let Some(upper) = max_income {
            base_tax += (upper - lower) * rate;
            lower = upper;
        }
    }
    brackets
}

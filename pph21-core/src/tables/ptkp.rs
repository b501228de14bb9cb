use std::ops::RangeInclusive;

use tracing::trace;

use crate::error::Pph21Error;
use crate::models::PtkpTable;
use crate::tables::{EARLIEST_SUPPORTED_YEAR, LATEST_SUPPORTED_YEAR, unsupported};

struct PtkpSchedule {
    years: RangeInclusive<i32>,
    base: i64,
    increment: i64,
}

/// PTKP history, oldest decree first. Amounts are yearly rupiah.
static SCHEDULES: [PtkpSchedule; 9] = [
    PtkpSchedule {
        years: EARLIEST_SUPPORTED_YEAR..=1993,
        base: 960_000,
        increment: 480_000,
    },
    PtkpSchedule {
        years: 1994..=2000,
        base: 1_728_000,
        increment: 864_000,
    },
    PtkpSchedule {
        years: 2001..=2004,
        base: 2_880_000,
        increment: 1_440_000,
    },
    PtkpSchedule {
        years: 2005..=2005,
        base: 12_000_000,
        increment: 1_200_000,
    },
    PtkpSchedule {
        years: 2006..=2008,
        base: 13_200_000,
        increment: 1_200_000,
    },
    PtkpSchedule {
        years: 2009..=2012,
        base: 15_840_000,
        increment: 1_320_000,
    },
    PtkpSchedule {
        years: 2013..=2014,
        base: 24_300_000,
        increment: 2_025_000,
    },
    PtkpSchedule {
        years: 2015..=2015,
        base: 36_000_000,
        increment: 3_000_000,
    },
    PtkpSchedule {
        years: 2016..=LATEST_SUPPORTED_YEAR,
        base: 54_000_000,
        increment: 4_500_000,
    },
];

/// PTKP constants effective for `year`.
///
/// Yields [`Pph21Error::UnsupportedYear`] for years outside the compiled-in
/// decree history.
pub fn ptkp_for_year(year: i32) -> Result<PtkpTable, Pph21Error> {
    let schedule = SCHEDULES
        .iter()
        .find(|s| s.years.contains(&year))
        .ok_or_else(|| unsupported(year))?;
    trace!(year, base = schedule.base, "resolved PTKP schedule");
    Ok(PtkpTable::new(schedule.base, schedule.increment))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::TaxpayerStatus;

    #[test]
    fn year_2016_married_two_dependents() {
        let table = ptkp_for_year(2016).unwrap();

        assert_eq!(table.amount(TaxpayerStatus::K2), dec!(67_500_000));
    }

    #[test]
    fn decree_boundary_years_resolve_to_the_right_constants() {
        assert_eq!(ptkp_for_year(1983).unwrap().base, dec!(960_000));
        assert_eq!(ptkp_for_year(1993).unwrap().base, dec!(960_000));
        assert_eq!(ptkp_for_year(1994).unwrap().base, dec!(1_728_000));
        assert_eq!(ptkp_for_year(2000).unwrap().base, dec!(1_728_000));
        assert_eq!(ptkp_for_year(2001).unwrap().base, dec!(2_880_000));
        assert_eq!(ptkp_for_year(2005).unwrap().base, dec!(12_000_000));
        assert_eq!(ptkp_for_year(2006).unwrap().base, dec!(13_200_000));
        assert_eq!(ptkp_for_year(2009).unwrap().base, dec!(15_840_000));
        assert_eq!(ptkp_for_year(2013).unwrap().base, dec!(24_300_000));
        assert_eq!(ptkp_for_year(2015).unwrap().base, dec!(36_000_000));
        assert_eq!(ptkp_for_year(2016).unwrap().base, dec!(54_000_000));
        assert_eq!(
            ptkp_for_year(LATEST_SUPPORTED_YEAR).unwrap().base,
            dec!(54_000_000)
        );
    }

    #[test]
    fn unsupported_years_report_the_latest_supported_year() {
        for year in [1982, LATEST_SUPPORTED_YEAR + 1, 9999] {
            assert_eq!(
                ptkp_for_year(year),
                Err(Pph21Error::UnsupportedYear {
                    year,
                    latest: LATEST_SUPPORTED_YEAR,
                })
            );
        }
    }

    #[test]
    fn decree_history_is_contiguous_and_sorted() {
        assert_eq!(*SCHEDULES[0].years.start(), EARLIEST_SUPPORTED_YEAR);
        for pair in SCHEDULES.windows(2) {
            assert_eq!(*pair[1].years.start(), pair[0].years.end() + 1);
        }
        assert_eq!(
            *SCHEDULES.last().unwrap().years.end(),
            LATEST_SUPPORTED_YEAR
        );
    }

    #[test]
    fn thresholds_rise_with_marriage_and_dependents_in_every_year() {
        for year in EARLIEST_SUPPORTED_YEAR..=LATEST_SUPPORTED_YEAR {
            let table = ptkp_for_year(year).unwrap();

            for d in 0..=2usize {
                // One more dependent always raises the threshold.
                assert!(
                    table.amount(TaxpayerStatus::ALL[d + 1]) > table.amount(TaxpayerStatus::ALL[d])
                );
                assert!(
                    table.amount(TaxpayerStatus::ALL[4 + d + 1])
                        > table.amount(TaxpayerStatus::ALL[4 + d])
                );
            }
        }
    }
}

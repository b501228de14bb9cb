//! Year-indexed regulation history.
//!
//! Each table is a sorted list of disjoint inclusive year ranges, one per
//! law or ministerial decree, resolved by a single ordered lookup. The
//! tables are regulatory fact, compiled in and never mutated at runtime.

mod ptkp;
mod rates;

pub use ptkp::ptkp_for_year;
pub use rates::rates_for_year;

use crate::error::Pph21Error;

/// First year of the earliest supported income tax law (UU 7/1983).
pub const EARLIEST_SUPPORTED_YEAR: i32 = 1983;

/// Most recent year the compiled-in history covers.
pub const LATEST_SUPPORTED_YEAR: i32 = 2025;

pub(crate) fn unsupported(year: i32) -> Pph21Error {
    Pph21Error::UnsupportedYear {
        year,
        latest: LATEST_SUPPORTED_YEAR,
    }
}

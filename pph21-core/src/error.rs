use thiserror::Error;

/// Errors surfaced by the table providers and calculators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Pph21Error {
    /// The requested year falls outside every known regulation period.
    ///
    /// Carries the requested year and the latest year the compiled-in
    /// history covers. A nearest table is never substituted.
    #[error("tax year {year} is not supported; the latest supported year is {latest}")]
    UnsupportedYear { year: i32, latest: i32 },

    /// A caller passed a value outside the calculator's domain, such as a
    /// negative income or tax amount.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

//! Shared helpers for the PPh 21 calculators.

use rust_decimal::Decimal;

/// Rounds to the nearest whole rupiah using half-up rounding (values at
/// exactly .5 round away from zero).
///
/// Rupiah has no circulating fractional unit, so derived monthly figures
/// are reported in whole rupiah.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pph21_core::calculations::common::round_rupiah;
///
/// assert_eq!(round_rupiah(dec!(4_500_000.4)), dec!(4_500_000));
/// assert_eq!(round_rupiah(dec!(4_500_000.5)), dec!(4_500_001));
/// ```
pub fn round_rupiah(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

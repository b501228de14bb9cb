use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal slice of a progressive rate schedule.
///
/// `base_tax` is the tax accumulated over all brackets below `min_income`,
/// so the tax on any amount that lands in this bracket is
/// `base_tax + (amount - min_income) * rate`. The last bracket of a schedule
/// is open-ended (`max_income` is `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxpayerStatus;

/// PTKP (non-taxable income) constants for one regulation period.
///
/// A period is fully described by two scalars: the threshold for an
/// unmarried taxpayer with no dependents, and the increment granted per
/// dependent. Marriage counts as one extra increment on top of the base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PtkpTable {
    pub base: Decimal,
    pub increment_per_dependent: Decimal,
}

impl PtkpTable {
    pub(crate) fn new(base: i64, increment_per_dependent: i64) -> Self {
        Self {
            base: Decimal::from(base),
            increment_per_dependent: Decimal::from(increment_per_dependent),
        }
    }

    /// Yearly non-taxable threshold for `status`.
    pub fn amount(&self, status: TaxpayerStatus) -> Decimal {
        let mut increments = Decimal::from(status.dependents());
        if status.is_married() {
            increments += Decimal::ONE;
        }
        self.base + self.increment_per_dependent * increments
    }

    /// Thresholds for all eight statuses, in [`TaxpayerStatus::ALL`] order.
    pub fn entries(&self) -> Vec<(TaxpayerStatus, Decimal)> {
        TaxpayerStatus::ALL
            .iter()
            .map(|&status| (status, self.amount(status)))
            .collect()
    }
}

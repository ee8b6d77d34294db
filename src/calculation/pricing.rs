//! Cent rounding and overflow-safe subtotals.
//!
//! Every monetary line is priced through a [`Subtotal`]. A line whose
//! product, or whose addition to the running subtotal, exceeds the decimal
//! range is counted as 0 and reported as
//! [`CalculationWarning::AmountOverflow`], so the subtotal always equals the
//! sum of the reported lines.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::models::CalculationWarning;

/// Rounds a dollar amount to cents, half away from zero.
pub(crate) fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Running subtotal of priced lines.
pub(crate) struct Subtotal<'w> {
    total: Decimal,
    warnings: &'w mut Vec<CalculationWarning>,
}

impl<'w> Subtotal<'w> {
    pub(crate) fn new(warnings: &'w mut Vec<CalculationWarning>) -> Self {
        Self {
            total: Decimal::ZERO,
            warnings,
        }
    }

    /// Prices `units * rate` to cents and adds it; returns the line amount.
    pub(crate) fn price(&mut self, field: &str, units: Decimal, rate: Decimal) -> Decimal {
        match units.checked_mul(rate) {
            Some(amount) => self.add(field, round_to_cents(amount)),
            None => self.overflow(field),
        }
    }

    /// Adds a flat amount, rounded to cents; returns the line amount.
    pub(crate) fn add(&mut self, field: &str, amount: Decimal) -> Decimal {
        let amount = round_to_cents(amount);
        match self.total.checked_add(amount) {
            Some(total) => {
                self.total = total;
                amount
            }
            None => self.overflow(field),
        }
    }

    pub(crate) fn total(&self) -> Decimal {
        self.total
    }

    fn overflow(&mut self, field: &str) -> Decimal {
        warn!(field, "Charge line exceeds decimal range; counted as 0");
        self.warnings.push(CalculationWarning::AmountOverflow {
            field: field.to_string(),
        });
        Decimal::ZERO
    }
}

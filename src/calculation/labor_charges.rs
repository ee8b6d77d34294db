//! Labor charge calculation.
//!
//! Sums classified labor hours across days and prices each tier at the
//! rate card's labor rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LaborRates;
use crate::models::{CalculationWarning, ClassifiedDay, LaborCharges, TierCharge};

use super::pricing::Subtotal;

/// The result of pricing labor tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborChargesResult {
    /// The priced tiers.
    pub charges: LaborCharges,
    /// Tiers that could not be priced.
    pub warnings: Vec<CalculationWarning>,
}

/// Prices the labor tiers of a set of classified days.
///
/// A tier whose charge exceeds the decimal range is counted as 0 and
/// reported as [`CalculationWarning::AmountOverflow`].
///
/// # Example
///
/// ```
/// use charge_engine::calculation::calculate_labor_charges;
/// use charge_engine::config::LaborRates;
/// use charge_engine::models::ClassifiedDay;
/// use rust_decimal::Decimal;
///
/// let day = ClassifiedDay {
///     straight_hours: Decimal::from(8),
///     overtime_hours: Decimal::from(2),
///     ..ClassifiedDay::default()
/// };
///
/// let result = calculate_labor_charges([&day], &LaborRates::default());
/// assert_eq!(result.charges.straight.amount, Decimal::from(960));
/// assert_eq!(result.charges.overtime.amount, Decimal::from(360));
/// assert_eq!(result.charges.subtotal, Decimal::from(1320));
/// ```
pub fn calculate_labor_charges<'a, I>(days: I, rates: &LaborRates) -> LaborChargesResult
where
    I: IntoIterator<Item = &'a ClassifiedDay>,
{
    let (straight, overtime, double) = days.into_iter().fold(
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        |(straight, overtime, double), day| {
            (
                straight + day.straight_hours,
                overtime + day.overtime_hours,
                double + day.double_hours,
            )
        },
    );

    let mut warnings = Vec::new();
    let mut subtotal = Subtotal::new(&mut warnings);
    let straight = TierCharge {
        hours: straight,
        rate: rates.straight,
        amount: subtotal.price("labor.straight", straight, rates.straight),
    };
    let overtime = TierCharge {
        hours: overtime,
        rate: rates.overtime,
        amount: subtotal.price("labor.overtime", overtime, rates.overtime),
    };
    let double = TierCharge {
        hours: double,
        rate: rates.double,
        amount: subtotal.price("labor.double", double, rates.double),
    };
    let subtotal = subtotal.total();

    LaborChargesResult {
        charges: LaborCharges {
            straight,
            overtime,
            double,
            subtotal,
        },
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn day(straight: &str, overtime: &str, double: &str) -> ClassifiedDay {
        ClassifiedDay {
            straight_hours: dec(straight),
            overtime_hours: dec(overtime),
            double_hours: dec(double),
            ..ClassifiedDay::default()
        }
    }

    #[test]
    fn test_lc_001_no_days_is_zero() {
        let charges = calculate_labor_charges([], &LaborRates::default()).charges;
        assert_eq!(charges.subtotal, Decimal::ZERO);
        assert_eq!(charges.straight.rate, dec("120"));
        assert_eq!(charges.overtime.rate, dec("180"));
        assert_eq!(charges.double.rate, dec("240"));
    }

    #[test]
    fn test_lc_002_sums_across_days() {
        let days = [day("8", "2", "0"), day("0", "0", "4"), day("0", "6", "0")];
        let charges = calculate_labor_charges(&days, &LaborRates::default()).charges;

        assert_eq!(charges.straight.hours, dec("8"));
        assert_eq!(charges.overtime.hours, dec("8"));
        assert_eq!(charges.double.hours, dec("4"));
        assert_eq!(charges.straight.amount, dec("960"));
        assert_eq!(charges.overtime.amount, dec("1440"));
        assert_eq!(charges.double.amount, dec("960"));
        assert_eq!(charges.subtotal, dec("3360"));
    }

    #[test]
    fn test_lc_003_custom_rates() {
        let rates = LaborRates {
            straight: dec("100"),
            overtime: dec("150"),
            double: dec("200"),
        };
        let result = calculate_labor_charges(&[day("1.5", "0.25", "0")], &rates);
        assert_eq!(result.charges.straight.amount, dec("150"));
        assert_eq!(result.charges.overtime.amount, dec("37.5"));
        assert_eq!(result.charges.subtotal, dec("187.50"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_lc_004_oversized_rate_degrades_tier() {
        let rates = LaborRates {
            straight: Decimal::MAX,
            ..LaborRates::default()
        };
        let result = calculate_labor_charges(&[day("8", "2", "0")], &rates);

        assert_eq!(result.charges.straight.hours, dec("8"));
        assert_eq!(result.charges.straight.amount, Decimal::ZERO);
        assert_eq!(result.charges.overtime.amount, dec("360"));
        assert_eq!(result.charges.subtotal, dec("360"));
        assert_eq!(
            result.warnings,
            vec![CalculationWarning::AmountOverflow {
                field: "labor.straight".to_string(),
            }]
        );
    }
}

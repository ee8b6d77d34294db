//! Travel expense calculation.
//!
//! Per diem, mileage, incidental and airfare amounts are computed from the
//! travel configuration alone, independently of the daily records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ExpenseRates;
use crate::models::{
    CalculationWarning, ExpenseLine, PerDiemType, TravelExpenseConfig, TravelExpenses,
};

use super::pricing::Subtotal;

/// The result of pricing travel expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelExpensesResult {
    /// The priced expenses.
    pub expenses: TravelExpenses,
    /// Negative inputs that were treated as zero and lines that could not
    /// be priced.
    pub warnings: Vec<CalculationWarning>,
}

/// Prices the travel expense configuration.
///
/// Negative mileage, incidental or airfare amounts are treated as zero and
/// reported as [`CalculationWarning::NegativeValue`]. A line that exceeds
/// the decimal range is counted as 0 and reported as
/// [`CalculationWarning::AmountOverflow`].
///
/// # Example
///
/// ```
/// use charge_engine::calculation::calculate_travel_expenses;
/// use charge_engine::config::ExpenseRates;
/// use charge_engine::models::{AirTravel, PerDiemType, TravelExpenseConfig};
/// use rust_decimal::Decimal;
///
/// let config = TravelExpenseConfig {
///     per_diem_type: PerDiemType::NonLocal,
///     per_diem_days: 3,
///     mileage: Decimal::from(100),
///     other_travel: Decimal::from(20),
///     air_travel: AirTravel { cost: Decimal::from(300) },
/// };
///
/// let result = calculate_travel_expenses(&config, &ExpenseRates::default());
/// assert_eq!(result.expenses.per_diem.amount, Decimal::from(660));
/// assert_eq!(result.expenses.mileage.amount, Decimal::from(63));
/// assert_eq!(result.expenses.subtotal, Decimal::from(1043));
/// ```
pub fn calculate_travel_expenses(
    config: &TravelExpenseConfig,
    rates: &ExpenseRates,
) -> TravelExpensesResult {
    let mut warnings = Vec::new();

    let per_diem_rate = match config.per_diem_type {
        PerDiemType::Local => rates.per_diem_local,
        PerDiemType::NonLocal => rates.per_diem_non_local,
    };
    let per_diem_days = Decimal::from(config.per_diem_days);
    let miles = non_negative("mileage", config.mileage, &mut warnings);
    let other = non_negative("otherTravel", config.other_travel, &mut warnings);
    let airfare = non_negative("airTravel.cost", config.air_travel.cost, &mut warnings);

    let mut subtotal = Subtotal::new(&mut warnings);
    let per_diem = ExpenseLine {
        units: per_diem_days,
        rate: per_diem_rate,
        amount: subtotal.price("expenses.perDiem", per_diem_days, per_diem_rate),
    };
    let mileage = ExpenseLine {
        units: miles,
        rate: rates.mileage,
        amount: subtotal.price("expenses.mileage", miles, rates.mileage),
    };
    let other = subtotal.add("expenses.other", other);
    let airfare = subtotal.add("expenses.airfare", airfare);
    let subtotal = subtotal.total();

    TravelExpensesResult {
        expenses: TravelExpenses {
            per_diem,
            mileage,
            other,
            airfare,
            subtotal,
        },
        warnings,
    }
}

fn non_negative(field: &str, value: Decimal, warnings: &mut Vec<CalculationWarning>) -> Decimal {
    if value >= Decimal::ZERO {
        return value;
    }
    warn!(field, value = %value, "Negative travel expense input treated as 0");
    warnings.push(CalculationWarning::NegativeValue {
        date: None,
        field: field.to_string(),
        value,
    });
    Decimal::ZERO
}

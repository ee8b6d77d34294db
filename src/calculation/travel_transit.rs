//! Travel-transit charge calculation.
//!
//! Each record's travel hours are assigned wholesale to the bucket of its
//! day type. There is no 8-hour split for travel.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TravelRates;
use crate::models::{CalculationWarning, TierCharge, TravelCharges};

use super::DayType;
use super::pricing::Subtotal;

/// The result of pricing travel-transit buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelChargesResult {
    /// The priced buckets.
    pub charges: TravelCharges,
    /// Buckets that could not be priced.
    pub warnings: Vec<CalculationWarning>,
}

/// Prices travel hours by day type.
///
/// A bucket whose charge exceeds the decimal range is counted as 0 and
/// reported as [`CalculationWarning::AmountOverflow`].
///
/// # Example
///
/// ```
/// use charge_engine::calculation::{calculate_travel_charges, DayType};
/// use charge_engine::config::TravelRates;
/// use rust_decimal::Decimal;
///
/// let charges = calculate_travel_charges(
///     [
///         (DayType::Weekday, Decimal::from(3)),
///         (DayType::SundayOrHoliday, Decimal::from(2)),
///     ],
///     &TravelRates::default(),
/// )
/// .charges;
/// assert_eq!(charges.weekday.amount, Decimal::from(240));
/// assert_eq!(charges.sunday_holiday.amount, Decimal::from(320));
/// assert_eq!(charges.subtotal, Decimal::from(560));
/// ```
pub fn calculate_travel_charges<I>(days: I, rates: &TravelRates) -> TravelChargesResult
where
    I: IntoIterator<Item = (DayType, Decimal)>,
{
    let mut weekday = Decimal::ZERO;
    let mut saturday = Decimal::ZERO;
    let mut sunday_holiday = Decimal::ZERO;

    for (day_type, hours) in days {
        match day_type {
            DayType::Weekday => weekday += hours,
            DayType::Saturday => saturday += hours,
            DayType::SundayOrHoliday => sunday_holiday += hours,
        }
    }

    let mut warnings = Vec::new();
    let mut subtotal = Subtotal::new(&mut warnings);
    let weekday = TierCharge {
        hours: weekday,
        rate: rates.weekday,
        amount: subtotal.price("travel.weekday", weekday, rates.weekday),
    };
    let saturday = TierCharge {
        hours: saturday,
        rate: rates.saturday,
        amount: subtotal.price("travel.saturday", saturday, rates.saturday),
    };
    let sunday_holiday = TierCharge {
        hours: sunday_holiday,
        rate: rates.sunday_holiday,
        amount: subtotal.price("travel.sundayHoliday", sunday_holiday, rates.sunday_holiday),
    };
    let subtotal = subtotal.total();

    TravelChargesResult {
        charges: TravelCharges {
            weekday,
            saturday,
            sunday_holiday,
            subtotal,
        },
        warnings,
    }
}

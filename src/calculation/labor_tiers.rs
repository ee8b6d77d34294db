//! Labor tier classification.
//!
//! Splits a day's on-site hours into straight, overtime and double-time
//! tiers according to its day type.
//!
//! ## Tier Structure
//!
//! - **Weekday:** first 8 hours straight time, remainder overtime
//! - **Saturday:** all hours overtime
//! - **Sunday/Holiday:** all hours double time

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayType;

/// Weekday hours billed at straight time before overtime applies.
pub const STRAIGHT_TIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// On-site hours split into labor tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborHours {
    /// Straight-time hours.
    pub straight: Decimal,
    /// Overtime hours.
    pub overtime: Decimal,
    /// Double-time hours.
    pub double: Decimal,
}

/// Splits on-site hours into labor tiers for a day type.
///
/// Non-positive hours produce all-zero tiers.
///
/// # Examples
///
/// ## Weekday over the threshold
///
/// ```
/// use charge_engine::calculation::{split_labor_hours, DayType};
/// use rust_decimal::Decimal;
///
/// let tiers = split_labor_hours(Decimal::from(10), DayType::Weekday);
/// assert_eq!(tiers.straight, Decimal::from(8));
/// assert_eq!(tiers.overtime, Decimal::from(2));
/// assert_eq!(tiers.double, Decimal::ZERO);
/// ```
///
/// ## Sunday
///
/// ```
/// use charge_engine::calculation::{split_labor_hours, DayType};
/// use rust_decimal::Decimal;
///
/// let tiers = split_labor_hours(Decimal::from(4), DayType::SundayOrHoliday);
/// assert_eq!(tiers.double, Decimal::from(4));
/// ```
pub fn split_labor_hours(onsite_hours: Decimal, day_type: DayType) -> LaborHours {
    if onsite_hours <= Decimal::ZERO {
        return LaborHours::default();
    }

    match day_type {
        DayType::SundayOrHoliday => LaborHours {
            double: onsite_hours,
            ..LaborHours::default()
        },
        DayType::Saturday => LaborHours {
            overtime: onsite_hours,
            ..LaborHours::default()
        },
        DayType::Weekday => LaborHours {
            straight: onsite_hours.min(STRAIGHT_TIME_THRESHOLD),
            overtime: (onsite_hours - STRAIGHT_TIME_THRESHOLD).max(Decimal::ZERO),
            double: Decimal::ZERO,
        },
    }
}

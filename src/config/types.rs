//! Rate card types.
//!
//! This module contains the strongly-typed rate structures that price
//! classified hours and travel expenses. Every section defaults to the
//! engine's standard rates, so a YAML file only needs the rates it changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Hourly labor rates by tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborRates {
    /// Straight-time rate.
    pub straight: Decimal,
    /// Overtime rate.
    pub overtime: Decimal,
    /// Double-time rate.
    pub double: Decimal,
}

impl Default for LaborRates {
    fn default() -> Self {
        Self {
            straight: Decimal::new(120, 0),
            overtime: Decimal::new(180, 0),
            double: Decimal::new(240, 0),
        }
    }
}

/// Hourly travel-transit rates by day type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelRates {
    /// Weekday travel rate.
    pub weekday: Decimal,
    /// Saturday travel rate.
    pub saturday: Decimal,
    /// Sunday and holiday travel rate.
    pub sunday_holiday: Decimal,
}

impl Default for TravelRates {
    fn default() -> Self {
        Self {
            weekday: Decimal::new(80, 0),
            saturday: Decimal::new(120, 0),
            sunday_holiday: Decimal::new(160, 0),
        }
    }
}

/// Unit rates for travel expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseRates {
    /// Per diem per day for local jobs.
    pub per_diem_local: Decimal,
    /// Per diem per day for non-local jobs.
    pub per_diem_non_local: Decimal,
    /// Reimbursement per mile driven.
    ///
    /// The report generator elsewhere in the suite prices mileage at
    /// $0.67; the engine's rate is $0.63.
    pub mileage: Decimal,
}

impl Default for ExpenseRates {
    fn default() -> Self {
        Self {
            per_diem_local: Decimal::new(65, 0),
            per_diem_non_local: Decimal::new(220, 0),
            mileage: Decimal::new(63, 2),
        }
    }
}

/// The complete set of rates used to price a charge summary.
///
/// # Example
///
/// ```
/// use charge_engine::config::RateCard;
/// use rust_decimal::Decimal;
///
/// let card = RateCard::default();
/// assert_eq!(card.labor.overtime, Decimal::from(180));
/// assert_eq!(card.travel.saturday, Decimal::from(120));
/// assert_eq!(card.expenses.mileage, Decimal::new(63, 2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCard {
    /// Labor rates.
    pub labor: LaborRates,
    /// Travel-transit rates.
    pub travel: TravelRates,
    /// Travel expense rates.
    pub expenses: ExpenseRates,
}

impl RateCard {
    /// Checks that no rate is negative.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] naming the first negative rate.
    pub fn validate(&self) -> EngineResult<()> {
        let rates = [
            ("labor.straight", self.labor.straight),
            ("labor.overtime", self.labor.overtime),
            ("labor.double", self.labor.double),
            ("travel.weekday", self.travel.weekday),
            ("travel.saturday", self.travel.saturday),
            ("travel.sunday_holiday", self.travel.sunday_holiday),
            ("expenses.per_diem_local", self.expenses.per_diem_local),
            ("expenses.per_diem_non_local", self.expenses.per_diem_non_local),
            ("expenses.mileage", self.expenses.mileage),
        ];

        match rates.iter().find(|(_, rate)| rate.is_sign_negative() && !rate.is_zero()) {
            Some((field, rate)) => Err(EngineError::InvalidRate {
                field: field.to_string(),
                value: rate.to_string(),
            }),
            None => Ok(()),
        }
    }
}

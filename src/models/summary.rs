//! Classification and charge summary models.
//!
//! This module contains [`ClassifiedDay`], the per-record output of the
//! entry classifier, and [`ChargeSummary`], the aggregated tiers, subtotals
//! and report lines handed to the summary tables and the PDF report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationWarning;
use crate::calculation::DayType;

/// Classified hour buckets for one daily record.
///
/// # Example
///
/// ```
/// use charge_engine::models::ClassifiedDay;
/// use rust_decimal::Decimal;
///
/// let day = ClassifiedDay::default();
/// assert_eq!(day.total_hours, Decimal::ZERO);
/// assert_eq!(day.labor_hours(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedDay {
    /// Combined outbound and return travel hours.
    pub travel_hours: Decimal,
    /// Labor hours at the straight-time tier.
    pub straight_hours: Decimal,
    /// Labor hours at the overtime tier.
    pub overtime_hours: Decimal,
    /// Labor hours at the double-time tier.
    pub double_hours: Decimal,
    /// Travel hours plus on-site hours net of lunch.
    pub total_hours: Decimal,
}

impl ClassifiedDay {
    /// Sum of the three labor tiers.
    pub fn labor_hours(&self) -> Decimal {
        self.straight_hours + self.overtime_hours + self.double_hours
    }
}

/// Hours, rate and charge for one pricing tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCharge {
    /// Hours billed in this tier.
    pub hours: Decimal,
    /// Hourly rate for this tier.
    pub rate: Decimal,
    /// `hours * rate`, rounded to cents; 0 when the product overflows.
    pub amount: Decimal,
}

/// Labor charges by tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborCharges {
    /// Straight-time tier.
    pub straight: TierCharge,
    /// Overtime tier.
    pub overtime: TierCharge,
    /// Double-time tier.
    pub double: TierCharge,
    /// Sum of the three tier amounts.
    pub subtotal: Decimal,
}

/// Travel-transit charges by day type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelCharges {
    /// Travel on weekdays.
    pub weekday: TierCharge,
    /// Travel on Saturdays.
    pub saturday: TierCharge,
    /// Travel on Sundays and holidays.
    pub sunday_holiday: TierCharge,
    /// Sum of the three bucket amounts.
    pub subtotal: Decimal,
}

/// A unit-priced expense line (days of per diem, miles driven).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseLine {
    /// Number of units.
    pub units: Decimal,
    /// Price per unit.
    pub rate: Decimal,
    /// `units * rate`, rounded to cents; 0 when the product overflows.
    pub amount: Decimal,
}

/// Travel expense reimbursements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelExpenses {
    /// Per diem days at the local or non-local rate.
    pub per_diem: ExpenseLine,
    /// Miles at the mileage rate.
    pub mileage: ExpenseLine,
    /// Flat incidental amount.
    pub other: Decimal,
    /// Flat airfare amount.
    pub airfare: Decimal,
    /// Sum of the four amounts.
    pub subtotal: Decimal,
}

/// One report row per input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLine {
    /// The record date.
    pub date: NaiveDate,
    /// The effective day type used for pricing.
    pub day_type: DayType,
    /// The classified hours for the record.
    pub hours: ClassifiedDay,
    /// The record's service work description, carried through unchanged.
    pub service_work: String,
}

/// The complete output of a charge aggregation.
///
/// The grand total is left to the caller:
/// `labor.subtotal + travel.subtotal + expenses.subtotal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeSummary {
    /// Labor charges.
    pub labor: LaborCharges,
    /// Travel-transit charges.
    pub travel: TravelCharges,
    /// Travel expense reimbursements.
    pub expenses: TravelExpenses,
    /// Per-record report lines, in input order.
    pub days: Vec<DayLine>,
    /// Warnings raised while classifying and pricing.
    pub warnings: Vec<CalculationWarning>,
}

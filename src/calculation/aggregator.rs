//! Charge aggregation.
//!
//! Runs the entry classifier over every record, prices labor tiers and
//! travel-transit buckets, and adds the travel expenses priced from the
//! travel configuration.

use tracing::debug;

use crate::config::RateCard;
use crate::models::{ChargeSummary, DailyRecord, DayLine, HolidayCalendar, TravelExpenseConfig};

use super::{
    ClassifyResult, calculate_labor_charges, calculate_travel_charges, calculate_travel_expenses,
    classify,
};

/// Prices daily records against a rate card and holiday calendar.
///
/// A calculator holds no per-call state; one instance can price any number
/// of jobs, from any number of threads.
///
/// # Example
///
/// ```
/// use charge_engine::ChargeCalculator;
/// use charge_engine::config::RateCard;
/// use charge_engine::models::{
///     DailyRecord, HolidayCalendar, PublicHoliday, TimeWindow, TravelExpenseConfig,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 7, 3).unwrap();
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     date,
///     name: "Independence Day (observed)".to_string(),
/// }]);
/// let calculator = ChargeCalculator::new(RateCard::default(), calendar);
///
/// let mut record = DailyRecord::new(date);
/// record.onsite = TimeWindow::new("08:00", "12:00");
///
/// let summary = calculator.aggregate(&[record], &TravelExpenseConfig::default());
/// assert_eq!(summary.labor.double.hours, Decimal::from(4));
/// assert_eq!(summary.labor.subtotal, Decimal::from(960));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargeCalculator {
    rates: RateCard,
    calendar: HolidayCalendar,
}

impl ChargeCalculator {
    /// Creates a calculator with an explicit rate card and holiday calendar.
    pub fn new(rates: RateCard, calendar: HolidayCalendar) -> Self {
        Self { rates, calendar }
    }

    /// Returns the rate card.
    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Classifies and prices `records` and `travel`.
    ///
    /// Never fails. Anomalies in individual records or in the travel
    /// configuration are collected into [`ChargeSummary::warnings`] and do
    /// not affect the pricing of other records. Record warnings come first,
    /// in input order, followed by pricing warnings.
    pub fn aggregate(
        &self,
        records: &[DailyRecord],
        travel: &TravelExpenseConfig,
    ) -> ChargeSummary {
        let classified: Vec<(&DailyRecord, ClassifyResult)> = records
            .iter()
            .map(|record| (record, classify(record, &self.calendar)))
            .collect();

        let labor =
            calculate_labor_charges(classified.iter().map(|(_, c)| &c.day), &self.rates.labor);

        let transit = calculate_travel_charges(
            classified.iter().map(|(_, c)| (c.day_type, c.day.travel_hours)),
            &self.rates.travel,
        );

        let expenses = calculate_travel_expenses(travel, &self.rates.expenses);

        let mut warnings = Vec::new();
        let mut days = Vec::with_capacity(classified.len());
        for (record, result) in classified {
            warnings.extend(result.warnings);
            days.push(DayLine {
                date: record.date,
                day_type: result.day_type,
                hours: result.day,
                service_work: record.service_work.clone(),
            });
        }
        warnings.extend(labor.warnings);
        warnings.extend(transit.warnings);
        warnings.extend(expenses.warnings);

        debug!(
            records = records.len(),
            labor_subtotal = %labor.charges.subtotal,
            travel_subtotal = %transit.charges.subtotal,
            expenses_subtotal = %expenses.expenses.subtotal,
            warnings = warnings.len(),
            "Charges aggregated"
        );

        ChargeSummary {
            labor: labor.charges,
            travel: transit.charges,
            expenses: expenses.expenses,
            days,
            warnings,
        }
    }
}

/// Classifies and prices `records` and `travel` with the standard rate card
/// and no calendar holidays.
///
/// # Example
///
/// ```
/// use charge_engine::aggregate;
/// use charge_engine::models::{DailyRecord, TimeWindow, TravelExpenseConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 2026-01-14 is a Wednesday
/// let mut record = DailyRecord::new(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// record.onsite = TimeWindow::new("08:00", "18:00");
///
/// let summary = aggregate(&[record], &TravelExpenseConfig::default());
/// assert_eq!(summary.labor.subtotal, Decimal::from(1320));
/// ```
pub fn aggregate(records: &[DailyRecord], travel: &TravelExpenseConfig) -> ChargeSummary {
    ChargeCalculator::default().aggregate(records, travel)
}

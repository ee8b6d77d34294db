//! Entry classification.
//!
//! Converts one [`DailyRecord`] into classified hour buckets: travel hours,
//! straight/overtime/double labor hours, and total hours. Classification
//! never fails; malformed input degrades to zero and is reported as a
//! [`CalculationWarning`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{
    CalculationWarning, ClassifiedDay, DailyRecord, HolidayCalendar, Segment, TimeField,
    TimeWindow,
};

use super::{DayType, classify_day_type, split_labor_hours};

/// The result of classifying one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResult {
    /// The classified hours.
    pub day: ClassifiedDay,
    /// The effective day type, including holiday overrides.
    pub day_type: DayType,
    /// Anomalies found in the record.
    pub warnings: Vec<CalculationWarning>,
}

/// Classifies a daily record into hour buckets.
///
/// The record is a holiday when its own `holiday` flag is set or its date
/// appears in `calendar`.
///
/// # Behavior
///
/// - Travel hours are the sum of the active travel windows, each clamped to
///   zero or more.
/// - On-site hours are the active on-site window less the lunch deduction.
/// - If on-site hours are negative the whole record, travel included, is
///   zeroed and an [`CalculationWarning::InconsistentOnsite`] is returned.
/// - Labor tiers are zero for travel-only days, inactive on-site windows, or
///   non-positive on-site hours.
/// - Total hours are travel hours plus on-site hours.
///
/// # Examples
///
/// ## Weekday with overtime
///
/// ```
/// use charge_engine::calculation::{classify, DayType};
/// use charge_engine::models::{DailyRecord, HolidayCalendar, TimeWindow};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 2026-01-14 is a Wednesday
/// let mut record = DailyRecord::new(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// record.onsite = TimeWindow::new("08:00", "18:00");
///
/// let result = classify(&record, &HolidayCalendar::default());
/// assert_eq!(result.day_type, DayType::Weekday);
/// assert_eq!(result.day.straight_hours, Decimal::from(8));
/// assert_eq!(result.day.overtime_hours, Decimal::from(2));
/// assert!(result.warnings.is_empty());
/// ```
///
/// ## Lunch longer than the on-site window
///
/// ```
/// use charge_engine::calculation::classify;
/// use charge_engine::models::{ClassifiedDay, DailyRecord, HolidayCalendar, TimeWindow};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut record = DailyRecord::new(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// record.travel_to = TimeWindow::new("07:00", "09:00");
/// record.onsite = TimeWindow::new("09:00", "13:00");
/// record.lunch = true;
/// record.lunch_duration = Decimal::from(5);
///
/// let result = classify(&record, &HolidayCalendar::default());
/// assert_eq!(result.day, ClassifiedDay::default());
/// assert_eq!(result.warnings[0].code(), "inconsistent_onsite");
/// ```
pub fn classify(record: &DailyRecord, calendar: &HolidayCalendar) -> ClassifyResult {
    let mut warnings = Vec::new();

    let travel_hours = window_hours(record, Segment::TravelTo, &record.travel_to, &mut warnings)
        .max(Decimal::ZERO)
        + window_hours(record, Segment::TravelHome, &record.travel_home, &mut warnings)
            .max(Decimal::ZERO);

    let lunch_deduction = lunch_deduction(record, &mut warnings);
    let window = window_hours(record, Segment::Onsite, &record.onsite, &mut warnings);
    // Only reachable with an inverted window and a lunch near the decimal
    // limit; the result is negative either way, so the guard below fires.
    let onsite_hours = window
        .checked_sub(lunch_deduction)
        .unwrap_or(Decimal::MIN);

    let holiday = record.holiday || calendar.is_holiday(record.date);
    let day_type = classify_day_type(record.date, holiday);

    if onsite_hours < Decimal::ZERO {
        warn!(
            date = %record.date,
            window_hours = %window,
            lunch_deduction = %lunch_deduction,
            "On-site hours negative after lunch; record zeroed"
        );
        warnings.push(CalculationWarning::InconsistentOnsite {
            date: record.date,
            window_hours: window,
            lunch_deduction,
        });
        return ClassifyResult {
            day: ClassifiedDay::default(),
            day_type,
            warnings,
        };
    }

    let labor = if !record.onsite.active || record.travel_only {
        Default::default()
    } else {
        split_labor_hours(onsite_hours, day_type)
    };

    let day = ClassifiedDay {
        travel_hours,
        straight_hours: labor.straight,
        overtime_hours: labor.overtime,
        double_hours: labor.double,
        total_hours: travel_hours + onsite_hours,
    };

    debug!(
        date = %record.date,
        day_type = %day_type,
        travel_hours = %day.travel_hours,
        straight_hours = %day.straight_hours,
        overtime_hours = %day.overtime_hours,
        double_hours = %day.double_hours,
        "Record classified"
    );

    ClassifyResult {
        day,
        day_type,
        warnings,
    }
}

/// Hours spanned by an active window; zero when inactive or malformed.
fn window_hours(
    record: &DailyRecord,
    segment: Segment,
    window: &TimeWindow,
    warnings: &mut Vec<CalculationWarning>,
) -> Decimal {
    if !window.active {
        return Decimal::ZERO;
    }

    match window.span_hours() {
        Ok(hours) => hours,
        Err(field) => {
            let value = match field {
                TimeField::Start => window.start.clone(),
                TimeField::End => window.end.clone(),
            };
            warn!(
                date = %record.date,
                segment = %segment,
                field = %field,
                value = ?value,
                "Malformed time on active window; counted as 0 hours"
            );
            warnings.push(CalculationWarning::MalformedTime {
                date: record.date,
                segment,
                field,
                value,
            });
            Decimal::ZERO
        }
    }
}

fn lunch_deduction(record: &DailyRecord, warnings: &mut Vec<CalculationWarning>) -> Decimal {
    if !record.lunch {
        return Decimal::ZERO;
    }
    if record.lunch_duration < Decimal::ZERO {
        warn!(
            date = %record.date,
            lunch_duration = %record.lunch_duration,
            "Negative lunch duration treated as 0"
        );
        warnings.push(CalculationWarning::NegativeValue {
            date: Some(record.date),
            field: "lunchDuration".to_string(),
            value: record.lunch_duration,
        });
        return Decimal::ZERO;
    }
    record.lunch_duration
}

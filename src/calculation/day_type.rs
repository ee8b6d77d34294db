//! Day type detection.
//!
//! One function decides the effective day type of a record. Both labor tier
//! classification and travel-transit bucketing consume its result, so the
//! two can never disagree about whether a day is a weekday, Saturday, or
//! Sunday/holiday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The effective calendar classification of a record.
///
/// # Example
///
/// ```
/// use charge_engine::calculation::DayType;
///
/// let day_type = DayType::SundayOrHoliday;
/// assert_eq!(day_type.to_string(), "Sunday/Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayType {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday, not a holiday.
    Saturday,
    /// Sunday, or any day flagged as a holiday.
    SundayOrHoliday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::SundayOrHoliday => write!(f, "Sunday/Holiday"),
        }
    }
}

/// Determines the day type for a local calendar date.
///
/// The holiday flag overrides the weekday: a holiday Wednesday is
/// [`DayType::SundayOrHoliday`].
///
/// # Example
///
/// ```
/// use charge_engine::calculation::{classify_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(classify_day_type(saturday, false), DayType::Saturday);
/// assert_eq!(classify_day_type(saturday, true), DayType::SundayOrHoliday);
///
/// // 2026-01-14 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// assert_eq!(classify_day_type(wednesday, false), DayType::Weekday);
/// ```
pub fn classify_day_type(date: NaiveDate, holiday: bool) -> DayType {
    if holiday {
        return DayType::SundayOrHoliday;
    }
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::SundayOrHoliday,
        _ => DayType::Weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    // ==========================================================================
    // DT-001: Monday through Friday are weekdays
    // ==========================================================================
    #[test]
    fn test_dt_001_monday_to_friday_are_weekdays() {
        // 2026-01-12 is a Monday
        for day in 12..=16 {
            let date = NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
            assert_eq!(classify_day_type(date, false), DayType::Weekday, "{date}");
        }
    }

    // ==========================================================================
    // DT-002: Saturday is Saturday
    // ==========================================================================
    #[test]
    fn test_dt_002_saturday_is_saturday() {
        assert_eq!(
            classify_day_type(make_date("2026-01-17"), false),
            DayType::Saturday
        );
    }

    // ==========================================================================
    // DT-003: Sunday is Sunday/Holiday
    // ==========================================================================
    #[test]
    fn test_dt_003_sunday_is_sunday_or_holiday() {
        assert_eq!(
            classify_day_type(make_date("2026-01-18"), false),
            DayType::SundayOrHoliday
        );
    }

    // ==========================================================================
    // DT-004: Holiday flag overrides every weekday
    // ==========================================================================
    #[test]
    fn test_dt_004_holiday_overrides_weekday() {
        for day in 12..=18 {
            let date = NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
            assert_eq!(
                classify_day_type(date, true),
                DayType::SundayOrHoliday,
                "{date}"
            );
        }
    }

    #[test]
    fn test_day_type_serialization() {
        let json = serde_json::to_string(&DayType::SundayOrHoliday).unwrap();
        assert_eq!(json, "\"sundayOrHoliday\"");
        let day_type: DayType = serde_json::from_str("\"weekday\"").unwrap();
        assert_eq!(day_type, DayType::Weekday);
    }
}

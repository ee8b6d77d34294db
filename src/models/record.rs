//! Daily record model and time windows.
//!
//! A [`DailyRecord`] is one workday as captured by the entry form: optional
//! outbound and return travel windows, an on-site window, lunch, and the
//! holiday/travel-only flags.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::coerce::lenient;
use super::warning::TimeField;

const SECONDS_PER_HOUR: i64 = 3600;

/// A start/end window on a single day, as entered on the form.
///
/// Times are kept as the raw clock strings (`HH:MM` or `HH:MM:SS`, 24-hour)
/// so that a blank or mistyped field can be reported instead of rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    /// Whether the window applies to the day at all.
    #[serde(default)]
    pub active: bool,
    /// The start clock time.
    #[serde(default)]
    pub start: Option<String>,
    /// The end clock time.
    #[serde(default)]
    pub end: Option<String>,
}

impl TimeWindow {
    /// Creates an active window from two clock strings.
    ///
    /// # Example
    ///
    /// ```
    /// use charge_engine::models::TimeWindow;
    /// use rust_decimal::Decimal;
    ///
    /// let window = TimeWindow::new("08:00", "18:30");
    /// assert_eq!(window.span_hours(), Ok(Decimal::new(105, 1)));
    /// ```
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            active: true,
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }

    /// Creates an inactive window.
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Returns `end - start` in hours.
    ///
    /// The result is signed: an end before the start yields a negative
    /// value, and callers decide how to treat it. The `active` flag is not
    /// consulted.
    ///
    /// # Errors
    ///
    /// Returns the [`TimeField`] that is missing or does not parse.
    pub fn span_hours(&self) -> Result<Decimal, TimeField> {
        let start = parse_clock(self.start.as_deref()).ok_or(TimeField::Start)?;
        let end = parse_clock(self.end.as_deref()).ok_or(TimeField::End)?;
        let seconds = (end - start).num_seconds();
        Ok(Decimal::new(seconds, 0) / Decimal::new(SECONDS_PER_HOUR, 0))
    }
}

/// Parses a 24-hour clock string with or without seconds.
fn parse_clock(value: Option<&str>) -> Option<NaiveTime> {
    let value = value?.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// One workday of travel and on-site time.
///
/// # Example
///
/// ```
/// use charge_engine::models::{DailyRecord, TimeWindow};
/// use chrono::NaiveDate;
///
/// let mut record = DailyRecord::new(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// record.onsite = TimeWindow::new("08:00", "16:00");
/// record.service_work = "Replaced spindle bearings".to_string();
/// assert!(!record.holiday);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// The local calendar date of the work.
    pub date: NaiveDate,
    /// Outbound travel window.
    #[serde(default)]
    pub travel_to: TimeWindow,
    /// Return travel window.
    #[serde(default)]
    pub travel_home: TimeWindow,
    /// On-site work window.
    #[serde(default)]
    pub onsite: TimeWindow,
    /// Whether a lunch break was taken.
    #[serde(default)]
    pub lunch: bool,
    /// Lunch length in hours; only deducted when `lunch` is set.
    #[serde(default, deserialize_with = "lenient")]
    pub lunch_duration: Decimal,
    /// Forces the Sunday/holiday tier regardless of weekday.
    #[serde(default)]
    pub holiday: bool,
    /// Counts travel only; on-site hours earn no labor tier.
    #[serde(default)]
    pub travel_only: bool,
    /// Free-text description of the work performed.
    #[serde(default)]
    pub service_work: String,
}

impl DailyRecord {
    /// Creates an empty record for `date` with every window inactive.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            travel_to: TimeWindow::inactive(),
            travel_home: TimeWindow::inactive(),
            onsite: TimeWindow::inactive(),
            lunch: false,
            lunch_duration: Decimal::ZERO,
            holiday: false,
            travel_only: false,
            service_work: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// TW-001: whole hours
    #[test]
    fn test_tw_001_whole_hours() {
        let window = TimeWindow::new("08:00", "18:00");
        assert_eq!(window.span_hours(), Ok(dec("10")));
    }

    /// TW-002: minutes and seconds
    #[test]
    fn test_tw_002_minutes_and_seconds() {
        assert_eq!(TimeWindow::new("09:15", "10:00").span_hours(), Ok(dec("0.75")));
        assert_eq!(
            TimeWindow::new("09:00:00", "09:30:00").span_hours(),
            Ok(dec("0.5"))
        );
    }

    /// TW-003: end before start is negative
    #[test]
    fn test_tw_003_end_before_start_is_negative() {
        let window = TimeWindow::new("17:00", "15:00");
        assert_eq!(window.span_hours(), Ok(dec("-2")));
    }

    /// TW-004: missing or malformed fields name the field
    #[test]
    fn test_tw_004_malformed_fields() {
        let missing_start = TimeWindow {
            active: true,
            start: None,
            end: Some("10:00".to_string()),
        };
        assert_eq!(missing_start.span_hours(), Err(TimeField::Start));

        assert_eq!(
            TimeWindow::new("08:00", "").span_hours(),
            Err(TimeField::End)
        );
        assert_eq!(
            TimeWindow::new("25:00", "26:00").span_hours(),
            Err(TimeField::Start)
        );
        assert_eq!(
            TimeWindow::new("8am", "5pm").span_hours(),
            Err(TimeField::Start)
        );
    }

    #[test]
    fn test_record_deserializes_form_json() {
        let json = r#"{
            "date": "2026-01-14",
            "travelTo": { "active": true, "start": "06:30", "end": "08:00" },
            "onsite": { "active": true, "start": "08:00", "end": "17:00" },
            "lunch": true,
            "lunchDuration": "0.5",
            "holiday": false,
            "travelOnly": false,
            "serviceWork": "PM inspection"
        }"#;

        let record: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
        assert!(record.travel_to.active);
        assert!(!record.travel_home.active);
        assert_eq!(record.lunch_duration, dec("0.5"));
        assert_eq!(record.service_work, "PM inspection");
    }

    #[test]
    fn test_record_deserialization_tolerates_blank_numbers() {
        let json = r#"{ "date": "2026-01-14", "lunch": true, "lunchDuration": "" }"#;
        let record: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.lunch_duration, Decimal::ZERO);
        assert!(!record.onsite.active);
    }
}

//! Holiday calendar used as the classifier's reference calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named public holiday.
///
/// # Example
///
/// ```
/// use charge_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 7, 3).unwrap(),
///     name: "Independence Day (observed)".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// The set of dates billed at the Sunday/holiday tier.
///
/// A record falling on a calendar date is classified exactly as if its own
/// `holiday` flag were set. The default calendar is empty, leaving the
/// per-record flag as the only holiday source.
///
/// # Example
///
/// ```
/// use charge_engine::models::{HolidayCalendar, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 12, 24).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// Holidays in the calendar, in no particular order.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holidays.
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        Self { holidays }
    }

    /// Checks whether `date` is a holiday in this calendar.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Returns the name of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.name.as_str())
    }
}

//! Core data models for the Charge Calculation Engine.
//!
//! This module contains the input records supplied by the entry form, the
//! travel expense configuration, the holiday calendar, and the summary
//! types produced by the engine.

mod calendar;
mod coerce;
mod record;
mod summary;
mod travel;
mod warning;

pub use calendar::{HolidayCalendar, PublicHoliday};
pub use record::{DailyRecord, TimeWindow};
pub use summary::{
    ChargeSummary, ClassifiedDay, DayLine, ExpenseLine, LaborCharges, TierCharge, TravelCharges,
    TravelExpenses,
};
pub use travel::{AirTravel, PerDiemType, TravelExpenseConfig};
pub use warning::{CalculationWarning, Segment, TimeField};

//! Warnings raised for degraded input.
//!
//! The engine never fails a calculation. Each input it has to coerce is
//! reported as a [`CalculationWarning`] carried alongside the result.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A time window on a daily record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Outbound travel.
    TravelTo,
    /// Return travel.
    TravelHome,
    /// On-site work.
    Onsite,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::TravelTo => write!(f, "travel-to"),
            Segment::TravelHome => write!(f, "travel-home"),
            Segment::Onsite => write!(f, "on-site"),
        }
    }
}

/// One end of a time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    /// The start time.
    Start,
    /// The end time.
    End,
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeField::Start => write!(f, "start"),
            TimeField::End => write!(f, "end"),
        }
    }
}

/// A recoverable anomaly found while classifying or pricing.
///
/// # Example
///
/// ```
/// use charge_engine::models::{CalculationWarning, Segment, TimeField};
/// use chrono::NaiveDate;
///
/// let warning = CalculationWarning::MalformedTime {
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     segment: Segment::TravelTo,
///     field: TimeField::End,
///     value: Some("7:6o".to_string()),
/// };
/// assert_eq!(warning.code(), "malformed_time");
/// assert_eq!(
///     warning.to_string(),
///     "2026-01-14: travel-to end time \"7:6o\" is malformed; segment counted as 0 hours"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum CalculationWarning {
    /// An active window had a missing or unparsable clock time.
    #[error(
        "{date}: {segment} {field} time {}; segment counted as 0 hours",
        describe_time(.value)
    )]
    MalformedTime {
        /// Date of the affected record.
        date: NaiveDate,
        /// The window holding the bad time.
        segment: Segment,
        /// Which end of the window is bad.
        field: TimeField,
        /// The raw value, if one was supplied.
        value: Option<String>,
    },

    /// The on-site window less lunch was negative; the whole record was zeroed.
    ///
    /// Raised both for a lunch longer than the window and for a window that
    /// ends before it starts.
    #[error(
        "{date}: {}; record zeroed",
        describe_onsite(.window_hours, .lunch_deduction)
    )]
    InconsistentOnsite {
        /// Date of the affected record.
        date: NaiveDate,
        /// Length of the on-site window before lunch (0 when inactive).
        window_hours: Decimal,
        /// The lunch deduction applied.
        lunch_deduction: Decimal,
    },

    /// A charge line or subtotal exceeded the decimal range; the line was
    /// counted as 0.
    #[error("{field} is too large to price; line counted as 0")]
    AmountOverflow {
        /// Dotted name of the affected line (e.g. `expenses.other`).
        field: String,
    },

    /// A quantity that must not be negative was; it was treated as 0.
    #[error("{field} was negative ({value}); treated as 0")]
    NegativeValue {
        /// Date of the affected record, when the value came from one.
        date: Option<NaiveDate>,
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: Decimal,
    },
}

impl CalculationWarning {
    /// A stable, machine-readable code for the warning kind.
    pub fn code(&self) -> &'static str {
        match self {
            CalculationWarning::MalformedTime { .. } => "malformed_time",
            CalculationWarning::InconsistentOnsite { .. } => "inconsistent_onsite",
            CalculationWarning::AmountOverflow { .. } => "amount_overflow",
            CalculationWarning::NegativeValue { .. } => "negative_value",
        }
    }

    /// The record date the warning refers to, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalculationWarning::MalformedTime { date, .. }
            | CalculationWarning::InconsistentOnsite { date, .. } => Some(*date),
            CalculationWarning::AmountOverflow { .. } => None,
            CalculationWarning::NegativeValue { date, .. } => *date,
        }
    }
}

fn describe_time(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(raw) if !raw.trim().is_empty() => format!("{raw:?} is malformed"),
        _ => "is missing".to_string(),
    }
}

fn describe_onsite(window_hours: &Decimal, lunch_deduction: &Decimal) -> String {
    if *window_hours < Decimal::ZERO {
        format!("on-site window of {window_hours} h ends before it starts")
    } else {
        format!(
            "on-site window of {window_hours} h less lunch of {lunch_deduction} h is negative"
        )
    }
}

//! Calculation logic for the Charge Calculation Engine.
//!
//! This module contains the day type detection shared by labor and travel
//! pricing, the entry classifier that turns one daily record into hour
//! buckets, the labor, travel-transit and travel expense pricing steps, and
//! the aggregator that ties them together.

mod aggregator;
mod day_type;
mod entry_classifier;
mod labor_charges;
mod labor_tiers;
mod pricing;
mod travel_expenses;
mod travel_transit;

pub use aggregator::{ChargeCalculator, aggregate};
pub use day_type::{DayType, classify_day_type};
pub use entry_classifier::{ClassifyResult, classify};
pub use labor_charges::{LaborChargesResult, calculate_labor_charges};
pub use labor_tiers::{LaborHours, STRAIGHT_TIME_THRESHOLD, split_labor_hours};
pub use travel_expenses::{TravelExpensesResult, calculate_travel_expenses};
pub use travel_transit::{TravelChargesResult, calculate_travel_charges};

//! Time & Billing Charge Calculation Engine for field service work.
//!
//! This crate classifies daily work and travel records into labor and travel
//! hour tiers and prices them, together with travel expense reimbursements,
//! into a [`ChargeSummary`](models::ChargeSummary).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::{ChargeCalculator, aggregate, classify};

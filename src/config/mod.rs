//! Rate card configuration for the Charge Calculation Engine.
//!
//! Rates default to the engine's standard price list. A deployment that
//! bills differently can load its own rate card from YAML.
//!
//! # Example
//!
//! ```no_run
//! use charge_engine::config::RateCardLoader;
//!
//! let card = RateCardLoader::load("./config/rates.yaml").unwrap().into_rate_card();
//! println!("Double time: ${}", card.labor.double);
//! ```

mod loader;
mod types;

pub use loader::RateCardLoader;
pub use types::{ExpenseRates, LaborRates, RateCard, TravelRates};

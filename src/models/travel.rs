//! Travel expense configuration.
//!
//! One [`TravelExpenseConfig`] is supplied per aggregation run. It is
//! priced independently of the daily records.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::coerce::lenient;

/// Which per diem rate applies.
///
/// Only an explicit `local` selects the local rate; a missing or
/// unrecognised value bills at the non-local rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerDiemType {
    /// Job within the local area.
    Local,
    /// Job requiring an overnight stay away.
    #[default]
    NonLocal,
}

impl FromStr for PerDiemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(PerDiemType::Local),
            "nonLocal" => Ok(PerDiemType::NonLocal),
            other => Err(format!("unknown per diem type: {other}")),
        }
    }
}

/// Airfare for the trip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirTravel {
    /// Flat airfare amount in dollars.
    #[serde(default, deserialize_with = "lenient")]
    pub cost: Decimal,
}

/// Travel expense inputs for one job.
///
/// # Example
///
/// ```
/// use charge_engine::models::{AirTravel, PerDiemType, TravelExpenseConfig};
/// use rust_decimal::Decimal;
///
/// let config = TravelExpenseConfig {
///     per_diem_type: PerDiemType::NonLocal,
///     per_diem_days: 3,
///     mileage: Decimal::from(100),
///     other_travel: Decimal::from(20),
///     air_travel: AirTravel { cost: Decimal::from(300) },
/// };
/// assert_eq!(config.per_diem_days, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelExpenseConfig {
    /// Per diem rate selector.
    #[serde(default, deserialize_with = "lenient")]
    pub per_diem_type: PerDiemType,
    /// Number of per diem days.
    #[serde(default, deserialize_with = "lenient")]
    pub per_diem_days: u32,
    /// Miles driven.
    #[serde(default, deserialize_with = "lenient")]
    pub mileage: Decimal,
    /// Flat incidental travel amount in dollars.
    #[serde(default, deserialize_with = "lenient")]
    pub other_travel: Decimal,
    /// Airfare.
    #[serde(default)]
    pub air_travel: AirTravel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_per_diem_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PerDiemType::NonLocal).unwrap(),
            "\"nonLocal\""
        );
        assert_eq!(
            serde_json::to_string(&PerDiemType::Local).unwrap(),
            "\"local\""
        );
    }

    #[test]
    fn test_travel_config_deserializes_form_json() {
        let json = r#"{
            "perDiemType": "nonLocal",
            "perDiemDays": 3,
            "mileage": "100",
            "otherTravel": 20,
            "airTravel": { "cost": 300.00 }
        }"#;
        let config: TravelExpenseConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.per_diem_type, PerDiemType::NonLocal);
        assert_eq!(config.per_diem_days, 3);
        assert_eq!(config.mileage, dec("100"));
        assert_eq!(config.other_travel, dec("20"));
        assert_eq!(config.air_travel.cost, dec("300"));
    }

    #[test]
    fn test_unknown_per_diem_type_bills_non_local() {
        let json = r#"{ "perDiemType": "regional", "perDiemDays": 1 }"#;
        let config: TravelExpenseConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.per_diem_type, PerDiemType::NonLocal);
    }

    #[test]
    fn test_empty_travel_config_is_all_zero() {
        let config: TravelExpenseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TravelExpenseConfig::default());
        assert_eq!(config.mileage, Decimal::ZERO);
        assert_eq!(config.air_travel.cost, Decimal::ZERO);
    }
}

//! Rate card loading functionality.
//!
//! This module provides the [`RateCardLoader`] type for loading a rate
//! card from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateCard;

/// Loads and provides access to a rate card.
///
/// # File Format
///
/// ```text
/// labor:
///   straight: 120
///   overtime: 180
///   double: 240
/// travel:
///   weekday: 80
///   saturday: 120
///   sunday_holiday: 160
/// expenses:
///   per_diem_local: 65
///   per_diem_non_local: 220
///   mileage: 0.63
/// ```
///
/// Omitted sections and fields keep their default rates.
///
/// # Example
///
/// ```no_run
/// use charge_engine::config::RateCardLoader;
///
/// let loader = RateCardLoader::load("./config/rates.yaml").unwrap();
/// println!("Overtime rate: ${}", loader.rate_card().labor.overtime);
/// ```
#[derive(Debug, Clone)]
pub struct RateCardLoader {
    rate_card: RateCard,
}

impl RateCardLoader {
    /// Loads a rate card from a YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read
    /// - [`EngineError::ConfigParseError`] if the file is not a valid rate card
    /// - [`EngineError::InvalidRate`] if any rate is negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses a rate card from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use charge_engine::config::RateCardLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = RateCardLoader::from_yaml_str("expenses:\n  mileage: 0.67\n")?;
    /// assert_eq!(loader.rate_card().expenses.mileage, Decimal::new(67, 2));
    /// assert_eq!(loader.rate_card().labor.straight, Decimal::from(120));
    /// # Ok::<(), charge_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let rate_card: RateCard =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        rate_card.validate()?;

        Ok(Self { rate_card })
    }

    /// Returns the loaded rate card.
    pub fn rate_card(&self) -> &RateCard {
        &self.rate_card
    }

    /// Consumes the loader, returning the rate card.
    pub fn into_rate_card(self) -> RateCard {
        self.rate_card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_bundled_rate_card() {
        let loader = RateCardLoader::load("config/rates.yaml").expect("Failed to load config");
        assert_eq!(loader.rate_card(), &RateCard::default());
    }

    #[test]
    fn test_missing_file() {
        let err = RateCardLoader::load("config/does_not_exist.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
        assert!(err.to_string().contains("does_not_exist.yaml"));
    }

    #[test]
    fn test_partial_card_keeps_defaults() {
        let yaml = "labor:\n  overtime: 175.50\ntravel:\n  weekday: 85\n";
        let card = RateCardLoader::from_yaml_str(yaml).unwrap().into_rate_card();

        assert_eq!(card.labor.overtime, dec("175.5"));
        assert_eq!(card.labor.straight, dec("120"));
        assert_eq!(card.travel.weekday, dec("85"));
        assert_eq!(card.travel.saturday, dec("120"));
        assert_eq!(card.expenses.mileage, dec("0.63"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = RateCardLoader::from_yaml_str("labor: [not, a, map").unwrap_err();
        match err {
            EngineError::ConfigParseError { path, .. } => assert_eq!(path, "<inline>"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = RateCardLoader::from_yaml_str("labor:\n  straight: lots\n").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParseError { .. }));
    }

    #[test]
    fn test_negative_rate_rejected_on_load() {
        let err = RateCardLoader::from_yaml_str("labor:\n  double: -240\n").unwrap_err();
        assert!(matches!(err, EngineError::InvalidRate { ref field, .. } if field == "labor.double"));
    }
}

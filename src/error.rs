//! Error types for the Charge Calculation Engine.
//!
//! Calculation itself never fails: degraded inputs surface as
//! [`CalculationWarning`](crate::models::CalculationWarning)s. The errors in
//! this module are raised only while loading a rate card.

use thiserror::Error;

/// The error type for rate card loading.
///
/// # Example
///
/// ```
/// use charge_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate in the rate card was negative.
    #[error("Invalid rate '{field}': {value} must not be negative")]
    InvalidRate {
        /// Dotted path of the offending rate (e.g. `labor.overtime`).
        field: String,
        /// The rejected value, as written.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Error types for the card ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! resolving holidays and quoting grading turnarounds.

use thiserror::Error;

/// The main error type for the card ledger.
///
/// All fallible operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use card_ledger::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/plans.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/plans.yaml");
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

    /// Configuration parsed but holds values the calculator cannot work with.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was rejected.
        field: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// No holiday rules or holiday table exist for the jurisdiction.
    #[error("Unsupported holiday jurisdiction: {jurisdiction}")]
    UnsupportedJurisdiction {
        /// The jurisdiction identifier that was requested.
        jurisdiction: String,
    },

    /// The holiday calendar has no data for the requested year.
    #[error("Holiday calendar unavailable for year {year} (jurisdiction {jurisdiction})")]
    HolidayCalendarUnavailable {
        /// The jurisdiction of the calendar.
        jurisdiction: String,
        /// The year that was requested.
        year: i32,
    },

    /// A card record or registration was invalid.
    #[error("Invalid card field '{field}': {message}")]
    InvalidCard {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Response types for the card ledger API.
//!
//! This module defines the success bodies and the error response structures
//! and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{GradingPlan, PublicHoliday, TurnaroundQuote};

/// Response body for `POST /quote`.
///
/// An unknown plan is reported with a zero cost and a null return date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// The plan name as requested.
    pub plan: String,
    /// Whether the plan was recognised.
    pub quoted: bool,
    /// Plan price, zero for an unknown plan.
    pub cost: Decimal,
    /// First day after the intake delay, if quoted.
    pub processing_start: Option<NaiveDate>,
    /// Predicted return date, if quoted.
    pub return_date: Option<NaiveDate>,
    /// Currency of `cost`.
    pub currency: String,
}

impl QuoteResponse {
    /// Builds the response body for a quote of `plan`.
    pub fn from_quote(plan: impl Into<String>, quote: &TurnaroundQuote, currency: &str) -> Self {
        let processing_start = match quote {
            TurnaroundQuote::Quoted {
                processing_start, ..
            } => Some(*processing_start),
            TurnaroundQuote::NoQuote => None,
        };

        Self {
            plan: plan.into(),
            quoted: quote.is_quoted(),
            cost: quote.cost(),
            processing_start,
            return_date: quote.return_date(),
            currency: currency.to_string(),
        }
    }
}

/// Response body for `GET /plans`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlansResponse {
    /// Currency of the plan prices.
    pub currency: String,
    /// Intake delay in calendar days applied before business days are counted.
    pub intake_offset_days: u32,
    /// Plans in display order.
    pub plans: Vec<GradingPlan>,
}

/// Response body for `GET /holidays/:year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// Jurisdiction of the holiday calendar.
    pub jurisdiction: String,
    /// The requested year.
    pub year: i32,
    /// Holidays in date order.
    pub holidays: Vec<PublicHoliday>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a holiday calendar unavailable error response.
    pub fn holiday_calendar_unavailable(jurisdiction: &str, year: i32) -> Self {
        Self::with_details(
            "HOLIDAY_CALENDAR_UNAVAILABLE",
            format!("No holiday data for {} in {}", jurisdiction, year),
            "Business days cannot be counted for a year without holiday data",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
            EngineError::UnsupportedJurisdiction { jurisdiction } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Unsupported holiday jurisdiction",
                    format!("No holiday rules for '{}'", jurisdiction),
                ),
            },
            EngineError::HolidayCalendarUnavailable { jurisdiction, year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::holiday_calendar_unavailable(&jurisdiction, year),
            },
            EngineError::InvalidCard { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_CARD",
                    format!("Invalid card field '{}': {}", field, message),
                    "The card data contains invalid information",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message,
                ),
            },
        }
    }
}

//! HTTP request handlers for the card ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{register_card, summarize_portfolio};
use crate::error::EngineError;
use crate::models::CardRegistration;

use super::request::{PortfolioRequest, QuoteRequest};
use super::response::{ApiError, ApiErrorResponse, HolidaysResponse, PlansResponse, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/plans", get(plans_handler))
        .route("/quote", post(quote_handler))
        .route("/cards", post(register_card_handler))
        .route("/portfolio/summary", post(portfolio_summary_handler))
        .route("/holidays/:year", get(holidays_handler))
        .with_state(state)
}

/// Handler for GET /plans endpoint.
///
/// Lists the configured grading plans in display order.
async fn plans_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    let body = PlansResponse {
        currency: state.currency().to_string(),
        intake_offset_days: config.settings().intake_offset_days,
        plans: config.plans().plans().to_vec(),
    };
    json_response(StatusCode::OK, body)
}

/// Handler for POST /quote endpoint.
///
/// Returns the plan price and predicted return date. An unknown plan is a
/// successful response with a zero cost and a null return date.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match state.calculator().quote(request.arrival_date, &request.plan) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                plan = %request.plan,
                arrival_date = %request.arrival_date,
                quoted = quote.is_quoted(),
                cost = %quote.cost(),
                duration_us = start_time.elapsed().as_micros(),
                "Quote completed"
            );
            let body = QuoteResponse::from_quote(request.plan, &quote, state.currency());
            json_response(StatusCode::OK, body)
        }
        Err(err) => engine_error_response(err, correlation_id, "Quote failed"),
    }
}

/// Handler for POST /cards endpoint.
///
/// Builds the ledger record for a newly bought card, quoting its grading
/// submission when one is given.
async fn register_card_handler(
    State(state): State<AppState>,
    payload: Result<Json<CardRegistration>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing card registration");

    let registration = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match register_card(state.calculator(), registration) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                card = %record.name,
                status = ?record.status,
                "Card registered"
            );
            json_response(StatusCode::CREATED, record)
        }
        Err(err) => engine_error_response(err, correlation_id, "Card registration failed"),
    }
}

/// Handler for POST /portfolio/summary endpoint.
async fn portfolio_summary_handler(
    payload: Result<Json<PortfolioRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing portfolio summary");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let summary = summarize_portfolio(&request.cards);
    info!(
        correlation_id = %correlation_id,
        cards = summary.card_count,
        holding_book_value = %summary.holding_book_value,
        "Portfolio summarised"
    );
    json_response(StatusCode::OK, summary)
}

/// Handler for GET /holidays/:year endpoint.
///
/// Lists the public holidays of the configured jurisdiction for one year.
async fn holidays_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let year = match year {
        Ok(Path(year)) => year,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid year in path"
            );
            let error = ApiError::validation_error(rejection.body_text());
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let holidays = state.calculator().calendar().holidays();
    match holidays.holidays_in_year(year) {
        Ok(list) => {
            info!(
                correlation_id = %correlation_id,
                year,
                holidays = list.len(),
                "Holiday lookup completed"
            );
            let body = HolidaysResponse {
                jurisdiction: holidays.jurisdiction().to_string(),
                year,
                holidays: list,
            };
            json_response(StatusCode::OK, body)
        }
        Err(err) => engine_error_response(err, correlation_id, "Holiday lookup failed"),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid, context: &str) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "{}", context);
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including the field name.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

//! Integration tests for the card ledger.
//!
//! This test suite drives the HTTP API and the library against the shipped
//! `config/psa_japan` directory, covering:
//! - Quotes across weekends, Golden Week and year boundaries
//! - Unknown plans
//! - Years without holiday data
//! - Card registration and the portfolio dashboard
//! - Configuration loading failures

use std::fs;
use std::str::FromStr;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use card_ledger::api::{AppState, create_router};
use card_ledger::calculation::{TurnaroundCalculator, register_card, summarize_portfolio};
use card_ledger::config::ConfigLoader;
use card_ledger::error::EngineError;
use card_ledger::models::{CardRegistration, CardStatus, GradingSubmission};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/psa_japan").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_quote(arrival_date: &str, plan: &str) -> (StatusCode, Value) {
    post_json(
        create_router_for_test(),
        "/quote",
        json!({ "arrival_date": arrival_date, "plan": plan }),
    )
    .await
}

fn assert_cost(result: &Value, expected: &str) {
    let actual = result["cost"].as_str().unwrap();
    assert_eq!(
        decimal(actual).normalize(),
        decimal(expected).normalize(),
        "Expected cost {}, got {}",
        expected,
        actual
    );
}

fn write_config(dir: &TempDir, calculator: &str, plans: &str) {
    fs::write(dir.path().join("calculator.yaml"), calculator).unwrap();
    fs::write(dir.path().join("plans.yaml"), plans).unwrap();
}

// =============================================================================
// Quotes
// =============================================================================

#[tokio::test]
async fn test_regular_plan_from_new_years_day() {
    let (status, result) = post_quote("2024-01-01", "Regular").await;

    assert_eq!(status, StatusCode::OK);
    assert_cost(&result, "9980");
    assert_eq!(result["processing_start"], "2024-01-22");
    assert_eq!(result["return_date"], "2024-02-05");
    assert_eq!(result["currency"], "JPY");
}

#[tokio::test]
async fn test_not_a_real_plan_has_zero_cost_and_null_return_date() {
    let (status, result) = post_quote("2024-01-01", "NotARealPlan").await;

    assert_eq!(status, StatusCode::OK);
    assert_cost(&result, "0");
    assert!(result["return_date"].is_null());
    assert!(result["processing_start"].is_null());
}

#[tokio::test]
async fn test_golden_week_pushes_return_date() {
    // Processing starts 2024-04-29 (Showa Day); May 3-6 are also off.
    let (status, result) = post_quote("2024-04-08", "Regular").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["return_date"], "2024-05-15");
}

#[tokio::test]
async fn test_express_costs_more_for_same_turnaround() {
    let (_, regular) = post_quote("2024-09-02", "Regular").await;
    let (_, express) = post_quote("2024-09-02", "Express").await;

    assert_eq!(regular["return_date"], express["return_date"]);
    assert_cost(&express, "16980");
}

#[tokio::test]
async fn test_value_plan_is_slowest() {
    let (_, value) = post_quote("2024-09-02", "Value").await;
    let (_, value_plus) = post_quote("2024-09-02", "ValuePlus").await;

    let value_return = make_date(value["return_date"].as_str().unwrap());
    let value_plus_return = make_date(value_plus["return_date"].as_str().unwrap());
    assert!(value_return > value_plus_return);
    assert_cost(&value, "3980");
    assert_cost(&value_plus, "6980");
}

#[tokio::test]
async fn test_quote_past_supported_years_is_rejected() {
    let (status, result) = post_quote("2099-12-01", "Value").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "HOLIDAY_CALENDAR_UNAVAILABLE");
}

#[tokio::test]
async fn test_invalid_date_is_a_data_error() {
    let (status, result) = post_quote("2024-02-30", "Regular").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

// =============================================================================
// Cards and portfolio
// =============================================================================

#[tokio::test]
async fn test_register_then_summarise() {
    let router = create_router_for_test();

    let (status, graded) = post_json(
        router.clone(),
        "/cards",
        json!({
            "name": "Charizard ex SAR",
            "model": "SV3 201/108",
            "purchase_date": "2024-03-01",
            "purchase_price": "30000",
            "grading": { "plan": "ValuePlus", "arrival_date": "2024-03-04" }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(graded["status"], "grading");

    let (status, owned) = post_json(
        router.clone(),
        "/cards",
        json!({
            "name": "Pikachu",
            "purchase_date": "2024-03-01",
            "purchase_price": "5000"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(owned["status"], "owned");
    assert!(owned["return_date"].is_null());

    let (status, summary) = post_json(
        router,
        "/portfolio/summary",
        json!({ "cards": [graded, owned] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        decimal(summary["holding_book_value"].as_str().unwrap()),
        decimal("41980")
    );
    assert_eq!(summary["card_count"], 2);
    assert_eq!(summary["grading_count"], 1);
}

#[test]
fn test_library_registration_matches_quote() {
    let calculator = TurnaroundCalculator::psa_japan();
    let registration = CardRegistration {
        name: "Rayquaza VMAX".to_string(),
        model: "S7R 079/067".to_string(),
        purchase_date: make_date("2024-12-10"),
        purchase_price: decimal("45000"),
        grading: Some(GradingSubmission {
            plan: "Regular".to_string(),
            arrival_date: make_date("2024-12-16"),
        }),
    };

    let record = register_card(&calculator, registration).unwrap();
    let quote = calculator.quote(make_date("2024-12-16"), "Regular").unwrap();

    assert_eq!(record.status, CardStatus::Grading);
    assert_eq!(record.return_date, quote.return_date());

    let mut sold = record.clone();
    sold.status = CardStatus::Sold;
    sold.sale_date = Some(make_date("2025-03-01"));
    sold.sale_price = decimal("80000");

    let summary = summarize_portfolio(&[record, sold]);
    assert_eq!(summary.holding_book_value, decimal("54980"));
    assert_eq!(summary.realized_profit, decimal("25020"));
}

// =============================================================================
// Holidays
// =============================================================================

#[tokio::test]
async fn test_holidays_endpoint_lists_substitute_holidays() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/holidays/2024")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: Value = serde_json::from_slice(&body).unwrap();
    let holidays = result["holidays"].as_array().unwrap();

    // 2024-02-11 fell on a Sunday; the 12th is the substitute.
    assert!(
        holidays
            .iter()
            .any(|h| h["date"] == "2024-02-12" && h["kind"] == "substitute")
    );
}

// =============================================================================
// Configuration loading
// =============================================================================

#[test]
fn test_shipped_config_loads() {
    let config = ConfigLoader::load("./config/psa_japan").unwrap();

    assert_eq!(config.settings().intake_offset_days, 21);
    assert_eq!(config.settings().currency, "JPY");
    assert_eq!(config.plans().len(), 4);
}

#[test]
fn test_missing_plans_file_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("calculator.yaml"), "jurisdiction: JP\n").unwrap();

    let result = ConfigLoader::load(dir.path());
    assert!(matches!(result, Err(EngineError::ConfigNotFound { path }) if path.ends_with("plans.yaml")));
}

#[test]
fn test_unsupported_jurisdiction_without_table_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        "jurisdiction: XX\n",
        "plans:\n  - name: Regular\n    business_days: 10\n    price: 9980\n",
    );

    let result = ConfigLoader::load(dir.path());
    assert!(matches!(
        result,
        Err(EngineError::UnsupportedJurisdiction { .. })
    ));
}

#[test]
fn test_custom_holiday_table_drives_quotes() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        "jurisdiction: XX\nintake_offset_days: 0\ncurrency: USD\n",
        "plans:\n  - name: Fast\n    business_days: 1\n    price: 25\n",
    );
    fs::write(
        dir.path().join("holidays.yaml"),
        "jurisdiction: XX\nfirst_year: 2024\nlast_year: 2024\nholidays:\n  - date: 2024-07-02\n    name: Founders Day\n",
    )
    .unwrap();

    let config = ConfigLoader::load(dir.path()).unwrap();
    let calculator = TurnaroundCalculator::from_config(&config);

    // Monday 2024-07-01 + 1 skips the Tuesday holiday.
    let quote = calculator.quote(make_date("2024-07-01"), "Fast").unwrap();
    assert_eq!(quote.return_date(), Some(make_date("2024-07-03")));

    let beyond = calculator.quote(make_date("2024-12-31"), "Fast");
    assert!(matches!(
        beyond,
        Err(EngineError::HolidayCalendarUnavailable { year: 2025, .. })
    ));
}

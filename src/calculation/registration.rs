//! Card registration.
//!
//! Turns a [`CardRegistration`] into the [`CardRecord`] row handed to the
//! external store, quoting the grading submission when there is one.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CardRecord, CardRegistration, CardStatus};

use super::TurnaroundCalculator;

/// Builds the ledger record for a newly registered card.
///
/// Without a grading submission the card is `Owned` with no grading fields.
/// With one, the plan is quoted and the card is `Grading`; an unknown plan
/// still registers the card but leaves the cost at zero and the return date
/// empty, matching the quote's fallback.
///
/// # Errors
///
/// Returns [`EngineError::InvalidCard`] for an empty name or a negative
/// purchase price, and propagates calendar errors from the quote.
///
/// # Example
///
/// ```
/// use card_ledger::calculation::{TurnaroundCalculator, register_card};
/// use card_ledger::models::{CardRegistration, CardStatus, GradingSubmission};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calculator = TurnaroundCalculator::psa_japan();
/// let registration = CardRegistration {
///     name: "Pikachu".to_string(),
///     model: "SV-P 001".to_string(),
///     purchase_date: NaiveDate::from_ymd_opt(2023, 12, 20).unwrap(),
///     purchase_price: Decimal::new(12000, 0),
///     grading: Some(GradingSubmission {
///         plan: "Regular".to_string(),
///         arrival_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     }),
/// };
///
/// let record = register_card(&calculator, registration).unwrap();
/// assert_eq!(record.status, CardStatus::Grading);
/// assert_eq!(record.psa_cost, Decimal::new(9980, 0));
/// assert_eq!(record.return_date, NaiveDate::from_ymd_opt(2024, 2, 5));
/// ```
pub fn register_card(
    calculator: &TurnaroundCalculator,
    registration: CardRegistration,
) -> EngineResult<CardRecord> {
    if registration.name.trim().is_empty() {
        return Err(EngineError::InvalidCard {
            field: "name".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if registration.purchase_price < Decimal::ZERO {
        return Err(EngineError::InvalidCard {
            field: "purchase_price".to_string(),
            message: format!("must not be negative (got {})", registration.purchase_price),
        });
    }

    let mut record = CardRecord {
        name: registration.name,
        model: registration.model,
        purchase_date: registration.purchase_date,
        purchase_price: registration.purchase_price,
        psa_plan: None,
        submission_date: None,
        psa_cost: Decimal::ZERO,
        return_date: None,
        status: CardStatus::Owned,
        sale_date: None,
        sale_price: Decimal::ZERO,
    };

    if let Some(grading) = registration.grading {
        let quote = calculator.quote(grading.arrival_date, &grading.plan)?;
        record.psa_cost = quote.cost();
        record.return_date = quote.return_date();
        record.psa_plan = Some(grading.plan);
        record.submission_date = Some(grading.arrival_date);
        record.status = CardStatus::Grading;
    }

    debug!(
        card = %record.name,
        status = ?record.status,
        psa_cost = %record.psa_cost,
        "Registered card"
    );

    Ok(record)
}

//! Turnaround quote model.
//!
//! A [`TurnaroundQuote`] is the output of the turnaround calculator: either the
//! plan's price and predicted return date, or an explicit "no quote" for a plan
//! name the calculator does not know.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of quoting a grading submission.
///
/// Callers that only care about the observable `{cost, return_date}` pair can use
/// [`TurnaroundQuote::cost`] and [`TurnaroundQuote::return_date`]; a
/// [`TurnaroundQuote::NoQuote`] reports a zero cost and no return date.
///
/// # Example
///
/// ```
/// use card_ledger::models::TurnaroundQuote;
/// use rust_decimal::Decimal;
///
/// let quote = TurnaroundQuote::NoQuote;
/// assert_eq!(quote.cost(), Decimal::ZERO);
/// assert_eq!(quote.return_date(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TurnaroundQuote {
    /// The plan was recognised and a return date computed.
    Quoted {
        /// Name of the plan that was quoted.
        plan: String,
        /// Price of the plan.
        cost: Decimal,
        /// Arrival date plus the intake delay; never counted as a business day.
        processing_start: NaiveDate,
        /// Predicted date the card comes back from grading.
        return_date: NaiveDate,
    },
    /// The plan name is not configured.
    NoQuote,
}

impl TurnaroundQuote {
    /// Returns the quoted cost, or zero when no quote is available.
    pub fn cost(&self) -> Decimal {
        match self {
            TurnaroundQuote::Quoted { cost, .. } => *cost,
            TurnaroundQuote::NoQuote => Decimal::ZERO,
        }
    }

    /// Returns the predicted return date, or `None` when no quote is available.
    pub fn return_date(&self) -> Option<NaiveDate> {
        match self {
            TurnaroundQuote::Quoted { return_date, .. } => Some(*return_date),
            TurnaroundQuote::NoQuote => None,
        }
    }

    /// Returns the quoted plan name.
    pub fn plan(&self) -> Option<&str> {
        match self {
            TurnaroundQuote::Quoted { plan, .. } => Some(plan),
            TurnaroundQuote::NoQuote => None,
        }
    }

    /// Returns true if a quote was produced.
    pub fn is_quoted(&self) -> bool {
        matches!(self, TurnaroundQuote::Quoted { .. })
    }
}

//! Grading plan model.
//!
//! A [`GradingPlan`] names one PSA service tier together with its fixed price
//! and the number of business days PSA needs to process a submission.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A grading service tier.
///
/// Plans are loaded once from configuration and never mutated afterwards.
///
/// # Example
///
/// ```
/// use card_ledger::models::GradingPlan;
/// use rust_decimal::Decimal;
///
/// let plan = GradingPlan {
///     name: "Regular".to_string(),
///     business_days: 10,
///     price: Decimal::new(9980, 0),
/// };
/// assert_eq!(plan.business_days, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingPlan {
    /// The plan identifier as shown to the user (e.g., "Regular").
    pub name: String,
    /// Business days PSA needs once processing starts.
    pub business_days: u32,
    /// Fixed price of the plan in the configured currency.
    pub price: Decimal,
}

impl GradingPlan {
    /// Creates a plan from its parts.
    pub fn new(name: impl Into<String>, business_days: u32, price: Decimal) -> Self {
        Self {
            name: name.into(),
            business_days,
            price,
        }
    }
}

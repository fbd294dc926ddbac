//! Card record model and related types.
//!
//! This module defines the [`CardRecord`] row kept for every card in the ledger,
//! its [`CardStatus`], and the [`CardRegistration`] form used to create one.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a card currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    /// In the collection, not submitted for grading.
    Owned,
    /// Submitted to PSA and awaiting return.
    Grading,
    /// Sold; the sale fields are filled in.
    Sold,
}

/// A single card in the ledger.
///
/// One record corresponds to one row in the external store. Costs and prices are
/// in the configured currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Card name.
    pub name: String,
    /// Set code / card number printed on the card.
    #[serde(default)]
    pub model: String,
    /// Date the card was bought.
    pub purchase_date: NaiveDate,
    /// Price paid for the card.
    pub purchase_price: Decimal,
    /// Grading plan the card was submitted under, if any.
    #[serde(default)]
    pub psa_plan: Option<String>,
    /// Date the card arrived at PSA, if submitted.
    #[serde(default)]
    pub submission_date: Option<NaiveDate>,
    /// Grading fee.
    #[serde(default)]
    pub psa_cost: Decimal,
    /// Predicted return date from grading.
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: CardStatus,
    /// Date the card was sold.
    #[serde(default)]
    pub sale_date: Option<NaiveDate>,
    /// Price the card sold for.
    #[serde(default)]
    pub sale_price: Decimal,
}

impl CardRecord {
    /// Returns the book value of the card: purchase price plus grading fee.
    ///
    /// # Example
    ///
    /// ```
    /// use card_ledger::models::{CardRecord, CardStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let card = CardRecord {
    ///     name: "Pikachu".to_string(),
    ///     model: "SV-P 001".to_string(),
    ///     purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     purchase_price: Decimal::new(12000, 0),
    ///     psa_plan: Some("Value".to_string()),
    ///     submission_date: NaiveDate::from_ymd_opt(2024, 1, 10),
    ///     psa_cost: Decimal::new(3980, 0),
    ///     return_date: None,
    ///     status: CardStatus::Grading,
    ///     sale_date: None,
    ///     sale_price: Decimal::ZERO,
    /// };
    /// assert_eq!(card.total_cost(), Decimal::new(15980, 0));
    /// ```
    pub fn total_cost(&self) -> Decimal {
        self.purchase_price + self.psa_cost
    }

    /// Returns sale price minus total cost.
    ///
    /// Only meaningful for sold cards; for unsold cards the sale price is zero
    /// and the result is the negated book value.
    pub fn profit(&self) -> Decimal {
        self.sale_price - self.total_cost()
    }

    /// Returns true if the card has been sold.
    pub fn is_sold(&self) -> bool {
        self.status == CardStatus::Sold
    }
}

/// A grading submission attached to a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingSubmission {
    /// Name of the grading plan.
    pub plan: String,
    /// Date the card arrived at PSA.
    pub arrival_date: NaiveDate,
}

/// Input for registering a newly bought card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRegistration {
    /// Card name.
    pub name: String,
    /// Set code / card number.
    #[serde(default)]
    pub model: String,
    /// Date the card was bought.
    pub purchase_date: NaiveDate,
    /// Price paid for the card.
    pub purchase_price: Decimal,
    /// Grading submission, when the card is sent to PSA straight away.
    #[serde(default)]
    pub grading: Option<GradingSubmission>,
}

//! Portfolio dashboard figures.
//!
//! Aggregates card records into the headline numbers shown on the dashboard:
//! the book value of cards still held and the profit realised on sold cards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CardRecord, CardStatus};

/// Headline figures for a set of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of purchase price plus grading fee over cards not yet sold.
    pub holding_book_value: Decimal,
    /// Sum of sale price minus total cost over sold cards.
    pub realized_profit: Decimal,
    /// Number of cards in the ledger.
    pub card_count: usize,
    /// Number of cards currently out for grading.
    pub grading_count: usize,
    /// Number of sold cards.
    pub sold_count: usize,
}

/// Summarises a set of card records.
///
/// # Example
///
/// ```
/// use card_ledger::calculation::summarize_portfolio;
/// use rust_decimal::Decimal;
///
/// let summary = summarize_portfolio(&[]);
/// assert_eq!(summary.holding_book_value, Decimal::ZERO);
/// assert_eq!(summary.card_count, 0);
/// ```
pub fn summarize_portfolio(cards: &[CardRecord]) -> PortfolioSummary {
    let (sold, held): (Vec<&CardRecord>, Vec<&CardRecord>) =
        cards.iter().partition(|card| card.is_sold());

    PortfolioSummary {
        holding_book_value: held.iter().map(|card| card.total_cost()).sum(),
        realized_profit: sold.iter().map(|card| card.profit()).sum(),
        card_count: cards.len(),
        grading_count: held
            .iter()
            .filter(|card| card.status == CardStatus::Grading)
            .count(),
        sold_count: sold.len(),
    }
}

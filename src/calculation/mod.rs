//! Calculation logic for the card ledger.
//!
//! This module contains business-day stepping, grading turnaround quotes,
//! card registration and the portfolio dashboard figures.

mod business_days;
mod portfolio;
mod registration;
mod turnaround;

pub use business_days::{add_business_days, count_business_days};
pub use portfolio::{PortfolioSummary, summarize_portfolio};
pub use registration::register_card;
pub use turnaround::TurnaroundCalculator;

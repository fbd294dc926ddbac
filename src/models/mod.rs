//! Core data models for the card ledger.
//!
//! This module contains all the domain models used throughout the crate.

mod card;
mod grading_plan;
mod holiday;
mod quote;

pub use card::{CardRecord, CardRegistration, CardStatus, GradingSubmission};
pub use grading_plan::GradingPlan;
pub use holiday::{HolidayKind, PublicHoliday};
pub use quote::TurnaroundQuote;

//! Card Ledger for PSA-graded trading cards
//!
//! This crate tracks a trading-card collection and predicts when cards sent to
//! PSA Japan for grading come back, counting business days against the
//! Japanese public holiday calendar.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;

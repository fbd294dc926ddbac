//! Calendar logic for deciding which days count as business days.
//!
//! This module provides the Japanese national holiday rules, holiday lookup
//! keyed by jurisdiction and year, and the weekend/holiday working-day oracle
//! used by the turnaround calculator.
//!
//! # Example
//!
//! ```
//! use card_ledger::calendar::BusinessCalendar;
//! use chrono::NaiveDate;
//!
//! let calendar = BusinessCalendar::japan();
//! let showa_day = NaiveDate::from_ymd_opt(2024, 4, 29).unwrap();
//! assert!(calendar.is_non_working_day(showa_day).unwrap());
//! ```

mod business_calendar;
mod holiday_calendar;
pub mod japan;

pub use business_calendar::{BusinessCalendar, DEFAULT_WEEKEND};
pub use holiday_calendar::HolidayCalendar;

//! Public holiday model.
//!
//! This module contains the [`PublicHoliday`] and [`HolidayKind`] types produced by
//! the holiday calendars and consulted when counting business days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a holiday came to be a day off.
///
/// Japanese law produces non-working days in three ways: the holiday itself,
/// a substitute day when a holiday falls on Sunday, and a citizens' holiday
/// for a single day sandwiched between two holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// A holiday named by statute (or a one-off statutory holiday).
    Statutory,
    /// A substitute holiday for a statutory holiday that fell on Sunday.
    Substitute,
    /// A day between two statutory holidays.
    Citizens,
}

/// Represents a public holiday in a jurisdiction.
///
/// # Example
///
/// ```
/// use card_ledger::models::{HolidayKind, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
///     jurisdiction: "JP".to_string(),
///     kind: HolidayKind::Statutory,
/// };
/// assert!(holiday.falls_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Coming of Age Day").
    pub name: String,
    /// The jurisdiction that observes this holiday (e.g., "JP").
    pub jurisdiction: String,
    /// Whether this is a statutory, substitute or citizens' holiday.
    #[serde(default = "default_kind")]
    pub kind: HolidayKind,
}

fn default_kind() -> HolidayKind {
    HolidayKind::Statutory
}

impl PublicHoliday {
    /// Returns true if the holiday falls on the given date.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

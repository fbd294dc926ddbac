//! Working-day classification.
//!
//! A [`BusinessCalendar`] combines a weekend day-of-week set with a
//! [`HolidayCalendar`] and answers whether a given date is a working day.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

use super::HolidayCalendar;

/// Weekend days used when none are configured.
pub const DEFAULT_WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Classifies dates as working or non-working days.
///
/// # Example
///
/// ```
/// use card_ledger::calendar::BusinessCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = BusinessCalendar::japan();
///
/// // 2024-01-06 is a Saturday
/// assert!(calendar.is_non_working_day(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()).unwrap());
/// // 2024-01-08 is Coming of Age Day (a Monday)
/// assert!(calendar.is_non_working_day(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()).unwrap());
/// // 2024-01-09 is an ordinary Tuesday
/// assert!(!calendar.is_non_working_day(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap()).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    weekend: Vec<Weekday>,
    holidays: HolidayCalendar,
}

impl BusinessCalendar {
    /// Creates a business calendar from a weekend set and a holiday calendar.
    ///
    /// Duplicate weekend days are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if every day of the week is a
    /// weekend day, since no date could ever be a working day.
    pub fn new(weekend: &[Weekday], holidays: HolidayCalendar) -> EngineResult<Self> {
        let mut days: Vec<Weekday> = Vec::with_capacity(weekend.len());
        for day in weekend {
            if !days.contains(day) {
                days.push(*day);
            }
        }
        days.sort_by_key(|d| d.num_days_from_monday());

        if days.len() >= 7 {
            return Err(EngineError::InvalidConfig {
                field: "weekend".to_string(),
                message: "at least one day of the week must be a working day".to_string(),
            });
        }

        Ok(Self {
            weekend: days,
            holidays,
        })
    }

    /// Saturday/Sunday weekends with Japanese national holidays.
    pub fn japan() -> Self {
        Self {
            weekend: DEFAULT_WEEKEND.to_vec(),
            holidays: HolidayCalendar::japan(),
        }
    }

    /// Returns the configured weekend days, Monday first.
    pub fn weekend(&self) -> &[Weekday] {
        &self.weekend
    }

    /// Returns the underlying holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns true if `date` falls on a configured weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    /// Returns true if `date` is a weekend day or a public holiday.
    ///
    /// The holiday calendar is consulted even for weekend days so that a date
    /// in a year without holiday data always fails.
    pub fn is_non_working_day(&self, date: NaiveDate) -> EngineResult<bool> {
        let is_holiday = self.holidays.is_holiday(date)?;
        Ok(is_holiday || self.is_weekend(date))
    }

    /// Returns true if `date` is a working day.
    pub fn is_business_day(&self, date: NaiveDate) -> EngineResult<bool> {
        Ok(!self.is_non_working_day(date)?)
    }
}

//! Business-day stepping.
//!
//! This module advances dates by a number of business days and counts the
//! business days between two dates under a [`BusinessCalendar`].

use chrono::NaiveDate;

use crate::calendar::BusinessCalendar;
use crate::error::{EngineError, EngineResult};

/// Advances `start` by `business_days` working days.
///
/// The date moves forward one calendar day at a time; each day that is not a
/// weekend day or holiday counts once. `start` itself is never counted, and
/// the returned date is the day on which the count reaches `business_days`.
/// With `business_days == 0`, `start` is returned unchanged.
///
/// # Arguments
///
/// * `start` - The date to count from (exclusive)
/// * `business_days` - Number of working days to advance
/// * `calendar` - The calendar deciding which days are working days
///
/// # Errors
///
/// Returns [`EngineError::HolidayCalendarUnavailable`] if the walk reaches a
/// year the holiday calendar does not cover, or
/// [`EngineError::CalculationError`] if the date overflows.
///
/// # Example
///
/// ```
/// use card_ledger::calculation::add_business_days;
/// use card_ledger::calendar::BusinessCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = BusinessCalendar::japan();
///
/// // Friday 2024-01-05 + 1 business day skips the weekend and
/// // Coming of Age Day (Monday 2024-01-08).
/// let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let next = add_business_days(friday, 1, &calendar).unwrap();
/// assert_eq!(next, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
/// ```
pub fn add_business_days(
    start: NaiveDate,
    business_days: u32,
    calendar: &BusinessCalendar,
) -> EngineResult<NaiveDate> {
    let mut current = start;
    let mut counted = 0;

    while counted < business_days {
        current = next_day(current)?;
        if calendar.is_business_day(current)? {
            counted += 1;
        }
    }

    Ok(current)
}

/// Counts working days in the half-open range `(after, up_to]`.
///
/// Returns zero when `up_to` is not after `after`. For any `start` and `n`,
/// `count_business_days(start, add_business_days(start, n)?)` equals `n`.
///
/// # Example
///
/// ```
/// use card_ledger::calculation::count_business_days;
/// use card_ledger::calendar::BusinessCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = BusinessCalendar::japan();
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 22).unwrap();
/// let next_monday = NaiveDate::from_ymd_opt(2024, 1, 29).unwrap();
/// assert_eq!(count_business_days(monday, next_monday, &calendar).unwrap(), 5);
/// ```
pub fn count_business_days(
    after: NaiveDate,
    up_to: NaiveDate,
    calendar: &BusinessCalendar,
) -> EngineResult<u32> {
    let mut current = after;
    let mut counted = 0;

    while current < up_to {
        current = next_day(current)?;
        if calendar.is_business_day(current)? {
            counted += 1;
        }
    }

    Ok(counted)
}

fn next_day(date: NaiveDate) -> EngineResult<NaiveDate> {
    date.succ_opt().ok_or_else(|| EngineError::CalculationError {
        message: format!("date overflow after {}", date),
    })
}

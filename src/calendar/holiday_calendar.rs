//! Holiday lookup keyed by jurisdiction and year.
//!
//! A [`HolidayCalendar`] is built once, either from the built-in Japanese
//! rules or from an explicit holiday table, and is read-only afterwards.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::HolidayTableConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayKind, PublicHoliday};

use super::japan;

/// Public holidays for one jurisdiction over a bounded range of years.
///
/// Lookups for a year outside the covered range fail with
/// [`EngineError::HolidayCalendarUnavailable`] rather than reporting "no
/// holiday", so a missing dataset can never silently turn holidays into
/// working days.
///
/// # Example
///
/// ```
/// use card_ledger::calendar::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::japan();
/// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert!(calendar.is_holiday(new_year).unwrap());
///
/// let far_future = NaiveDate::from_ymd_opt(2150, 1, 1).unwrap();
/// assert!(calendar.is_holiday(far_future).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    jurisdiction: String,
    years: RangeInclusive<i32>,
    holidays: BTreeMap<NaiveDate, PublicHoliday>,
}

impl HolidayCalendar {
    /// Builds the calendar of Japanese national holidays from the built-in rules.
    pub fn japan() -> Self {
        let years = japan::FIRST_SUPPORTED_YEAR..=japan::LAST_SUPPORTED_YEAR;
        let holidays: BTreeMap<NaiveDate, PublicHoliday> = years
            .clone()
            .flat_map(japan::holidays_for_year)
            .map(|holiday| (holiday.date, holiday))
            .collect();

        debug!(
            jurisdiction = japan::JURISDICTION,
            holidays = holidays.len(),
            "Built Japanese holiday calendar"
        );

        Self {
            jurisdiction: japan::JURISDICTION.to_string(),
            years,
            holidays,
        }
    }

    /// Returns the built-in calendar for a jurisdiction.
    ///
    /// Only `JP` has built-in rules; other jurisdictions need a holiday table.
    pub fn for_jurisdiction(jurisdiction: &str) -> EngineResult<Self> {
        if jurisdiction.eq_ignore_ascii_case(japan::JURISDICTION) {
            Ok(Self::japan())
        } else {
            Err(EngineError::UnsupportedJurisdiction {
                jurisdiction: jurisdiction.to_string(),
            })
        }
    }

    /// Builds a calendar from an explicit holiday table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the year range is empty, an
    /// entry falls outside the declared years, or two entries share a date.
    pub fn from_table(table: &HolidayTableConfig) -> EngineResult<Self> {
        if table.jurisdiction.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "holidays.jurisdiction".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if table.first_year > table.last_year {
            return Err(EngineError::InvalidConfig {
                field: "holidays.first_year".to_string(),
                message: format!(
                    "first_year {} is after last_year {}",
                    table.first_year, table.last_year
                ),
            });
        }

        let years = table.first_year..=table.last_year;
        let mut holidays = BTreeMap::new();

        for entry in &table.holidays {
            if !years.contains(&entry.date.year()) {
                return Err(EngineError::InvalidConfig {
                    field: "holidays.holidays".to_string(),
                    message: format!(
                        "{} ({}) is outside {}..={}",
                        entry.date, entry.name, table.first_year, table.last_year
                    ),
                });
            }

            let holiday = PublicHoliday {
                date: entry.date,
                name: entry.name.clone(),
                jurisdiction: table.jurisdiction.clone(),
                kind: HolidayKind::Statutory,
            };
            if holidays.insert(entry.date, holiday).is_some() {
                return Err(EngineError::InvalidConfig {
                    field: "holidays.holidays".to_string(),
                    message: format!("duplicate holiday date {}", entry.date),
                });
            }
        }

        debug!(
            jurisdiction = %table.jurisdiction,
            first_year = table.first_year,
            last_year = table.last_year,
            holidays = holidays.len(),
            "Built holiday calendar from table"
        );

        Ok(Self {
            jurisdiction: table.jurisdiction.clone(),
            years,
            holidays,
        })
    }

    /// Returns the jurisdiction identifier (e.g., "JP").
    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    /// Returns the inclusive range of years this calendar covers.
    pub fn supported_years(&self) -> RangeInclusive<i32> {
        self.years.clone()
    }

    fn ensure_year(&self, year: i32) -> EngineResult<()> {
        if self.years.contains(&year) {
            Ok(())
        } else {
            Err(EngineError::HolidayCalendarUnavailable {
                jurisdiction: self.jurisdiction.clone(),
                year,
            })
        }
    }

    /// Returns the holiday on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> EngineResult<Option<&PublicHoliday>> {
        self.ensure_year(date.year())?;
        Ok(self.holidays.get(&date))
    }

    /// Returns true if `date` is a public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> EngineResult<bool> {
        Ok(self.holiday_on(date)?.is_some())
    }

    /// Lists the holidays of `year` in date order.
    pub fn holidays_in_year(&self, year: i32) -> EngineResult<Vec<PublicHoliday>> {
        self.ensure_year(year)?;
        Ok(self
            .holidays
            .values()
            .filter(|holiday| holiday.date.year() == year)
            .cloned()
            .collect())
    }
}

//! Grading turnaround quotes.
//!
//! This module provides the [`TurnaroundCalculator`], which resolves a grading
//! plan by name and predicts when a card submitted under it comes back.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::calendar::BusinessCalendar;
use crate::config::{ConfigLoader, DEFAULT_INTAKE_OFFSET_DAYS, PlanTable};
use crate::error::{EngineError, EngineResult};
use crate::models::TurnaroundQuote;

use super::business_days::add_business_days;

/// Predicts grading return dates and costs.
///
/// The calculator owns an immutable plan table and business calendar; it holds
/// no mutable state, so one instance can serve concurrent callers.
///
/// # Example
///
/// ```
/// use card_ledger::calculation::TurnaroundCalculator;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calculator = TurnaroundCalculator::psa_japan();
/// let arrival = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let quote = calculator.quote(arrival, "Regular").unwrap();
/// assert_eq!(quote.cost(), Decimal::new(9980, 0));
/// assert_eq!(quote.return_date(), NaiveDate::from_ymd_opt(2024, 2, 5));
///
/// let none = calculator.quote(arrival, "NotARealPlan").unwrap();
/// assert_eq!(none.cost(), Decimal::ZERO);
/// assert_eq!(none.return_date(), None);
/// ```
#[derive(Debug, Clone)]
pub struct TurnaroundCalculator {
    plans: PlanTable,
    calendar: BusinessCalendar,
    intake_offset_days: u32,
}

impl TurnaroundCalculator {
    /// Creates a calculator from its parts.
    pub fn new(plans: PlanTable, calendar: BusinessCalendar, intake_offset_days: u32) -> Self {
        Self {
            plans,
            calendar,
            intake_offset_days,
        }
    }

    /// Creates a calculator from loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(
            config.plans().clone(),
            config.calendar().clone(),
            config.settings().intake_offset_days,
        )
    }

    /// PSA Japan plans, Japanese holidays, Saturday/Sunday weekend, 21-day intake.
    pub fn psa_japan() -> Self {
        Self::new(
            PlanTable::psa_japan(),
            BusinessCalendar::japan(),
            DEFAULT_INTAKE_OFFSET_DAYS,
        )
    }

    /// Returns the plan table.
    pub fn plans(&self) -> &PlanTable {
        &self.plans
    }

    /// Returns the business calendar.
    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// Returns the calendar-day delay between arrival and processing start.
    pub fn intake_offset_days(&self) -> u32 {
        self.intake_offset_days
    }

    /// Returns the date PSA starts counting business days for a card that
    /// arrived on `arrival_date`.
    ///
    /// The intake delay is measured in calendar days; weekends and holidays
    /// inside it do not extend it.
    pub fn processing_start(&self, arrival_date: NaiveDate) -> EngineResult<NaiveDate> {
        arrival_date
            .checked_add_days(Days::new(u64::from(self.intake_offset_days)))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "intake delay of {} days overflows from {}",
                    self.intake_offset_days, arrival_date
                ),
            })
    }

    /// Quotes a grading submission.
    ///
    /// An unknown plan name is not an error: it yields
    /// [`TurnaroundQuote::NoQuote`], which reports a zero cost and no return
    /// date.
    ///
    /// # Arguments
    ///
    /// * `arrival_date` - The date the card arrived at PSA
    /// * `plan_name` - The exact plan name (e.g., "Regular")
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::HolidayCalendarUnavailable`] if counting reaches
    /// a year without holiday data.
    pub fn quote(&self, arrival_date: NaiveDate, plan_name: &str) -> EngineResult<TurnaroundQuote> {
        let Some(plan) = self.plans.get(plan_name) else {
            debug!(plan = plan_name, "Unknown grading plan, no quote");
            return Ok(TurnaroundQuote::NoQuote);
        };

        let processing_start = self.processing_start(arrival_date)?;
        let return_date = add_business_days(processing_start, plan.business_days, &self.calendar)?;

        debug!(
            plan = %plan.name,
            arrival_date = %arrival_date,
            processing_start = %processing_start,
            return_date = %return_date,
            business_days = plan.business_days,
            "Quoted grading turnaround"
        );

        Ok(TurnaroundQuote::Quoted {
            plan: plan.name.clone(),
            cost: plan.price,
            processing_start,
            return_date,
        })
    }
}

impl Default for TurnaroundCalculator {
    fn default() -> Self {
        Self::psa_japan()
    }
}

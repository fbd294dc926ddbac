//! Configuration types for the turnaround calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{DEFAULT_WEEKEND, japan};
use crate::error::{EngineError, EngineResult};
use crate::models::GradingPlan;

/// Calendar days between a card arriving at PSA and processing starting.
pub const DEFAULT_INTAKE_OFFSET_DAYS: u32 = 21;

/// Currency code used when none is configured.
pub const DEFAULT_CURRENCY: &str = "JPY";

/// Calculator settings from `calculator.yaml`.
///
/// Every field is optional in the file; omitted fields take the PSA Japan
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    /// Holiday jurisdiction (e.g., "JP").
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
    /// Calendar days added to the arrival date before business days are counted.
    #[serde(default = "default_intake_offset_days")]
    pub intake_offset_days: u32,
    /// Days of the week that are never business days.
    #[serde(default = "default_weekend")]
    pub weekend: Vec<Weekday>,
    /// Currency code for plan prices and card values.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_jurisdiction() -> String {
    japan::JURISDICTION.to_string()
}

fn default_intake_offset_days() -> u32 {
    DEFAULT_INTAKE_OFFSET_DAYS
}

fn default_weekend() -> Vec<Weekday> {
    DEFAULT_WEEKEND.to_vec()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            jurisdiction: default_jurisdiction(),
            intake_offset_days: default_intake_offset_days(),
            weekend: default_weekend(),
            currency: default_currency(),
        }
    }
}

/// Plans configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PlansConfig {
    /// Plans in display order.
    pub plans: Vec<GradingPlan>,
}

/// A single entry in a holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// Explicit holiday table from `holidays.yaml`.
///
/// The table declares the years it covers; dates in those years that are not
/// listed are working days, dates outside them have no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayTableConfig {
    /// Jurisdiction the table describes.
    pub jurisdiction: String,
    /// First covered year (inclusive).
    pub first_year: i32,
    /// Last covered year (inclusive).
    pub last_year: i32,
    /// Holidays within the covered years.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

/// The validated, ordered set of grading plans.
///
/// # Example
///
/// ```
/// use card_ledger::config::PlanTable;
///
/// let plans = PlanTable::psa_japan();
/// assert_eq!(plans.names().collect::<Vec<_>>(), ["Value", "ValuePlus", "Regular", "Express"]);
/// assert!(plans.get("Regular").is_some());
/// assert!(plans.get("regular").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanTable {
    plans: Vec<GradingPlan>,
}

impl PlanTable {
    /// Creates a plan table, rejecting unusable plans.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the table is empty, a plan
    /// name is blank or repeated, or a price is negative.
    pub fn new(plans: Vec<GradingPlan>) -> EngineResult<Self> {
        if plans.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "plans".to_string(),
                message: "at least one plan must be configured".to_string(),
            });
        }

        for (index, plan) in plans.iter().enumerate() {
            if plan.name.trim().is_empty() {
                return Err(EngineError::InvalidConfig {
                    field: format!("plans[{}].name", index),
                    message: "must not be empty".to_string(),
                });
            }
            if plan.price < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: format!("plans.{}.price", plan.name),
                    message: format!("must not be negative (got {})", plan.price),
                });
            }
            if plans[..index].iter().any(|p| p.name == plan.name) {
                return Err(EngineError::InvalidConfig {
                    field: format!("plans.{}", plan.name),
                    message: "duplicate plan name".to_string(),
                });
            }
        }

        Ok(Self { plans })
    }

    /// The PSA Japan service tiers.
    pub fn psa_japan() -> Self {
        Self {
            plans: vec![
                GradingPlan::new("Value", 45, Decimal::new(3980, 0)),
                GradingPlan::new("ValuePlus", 20, Decimal::new(6980, 0)),
                GradingPlan::new("Regular", 10, Decimal::new(9980, 0)),
                GradingPlan::new("Express", 10, Decimal::new(16980, 0)),
            ],
        }
    }

    /// Looks up a plan by its exact name.
    pub fn get(&self, name: &str) -> Option<&GradingPlan> {
        self.plans.iter().find(|plan| plan.name == name)
    }

    /// Returns the plans in configured order.
    pub fn plans(&self) -> &[GradingPlan] {
        &self.plans
    }

    /// Returns the plan names in configured order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plans.iter().map(|plan| plan.name.as_str())
    }

    /// Returns the number of plans.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Returns true if no plans are configured.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl Default for PlanTable {
    fn default() -> Self {
        Self::psa_japan()
    }
}

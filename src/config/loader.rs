//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calendar::{BusinessCalendar, HolidayCalendar};
use crate::error::{EngineError, EngineResult};
use crate::models::GradingPlan;

use super::types::{CalculatorSettings, HolidayTableConfig, PlanTable, PlansConfig};

/// Loads, validates and provides access to calculator configuration.
///
/// All validation happens here, once: a `ConfigLoader` that was built
/// successfully always yields a usable calculator.
///
/// # Directory Structure
///
/// ```text
/// config/psa_japan/
/// ├── calculator.yaml   # Jurisdiction, intake offset, weekend, currency
/// ├── plans.yaml        # Grading plans in display order
/// └── holidays.yaml     # Optional explicit holiday table
/// ```
///
/// Without `holidays.yaml` the built-in rules for the configured jurisdiction
/// are used.
///
/// # Example
///
/// ```no_run
/// use card_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/psa_japan").unwrap();
/// let plan = loader.get_plan("Regular").unwrap();
/// println!("{} takes {} business days", plan.name, plan.business_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: CalculatorSettings,
    plans: PlanTable,
    calendar: BusinessCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/psa_japan")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `calculator.yaml` or `plans.yaml` is missing
    /// - Any file contains invalid YAML or negative numbers where unsigned are expected
    /// - A plan, the weekend set or the holiday table fails validation
    /// - The jurisdiction has no built-in rules and no holiday table is given
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<CalculatorSettings>(&path.join("calculator.yaml"))?;
        let plans_config = Self::load_yaml::<PlansConfig>(&path.join("plans.yaml"))?;

        let holidays_path = path.join("holidays.yaml");
        let holiday_table = if holidays_path.exists() {
            Some(Self::load_yaml::<HolidayTableConfig>(&holidays_path)?)
        } else {
            None
        };

        debug!(
            path = %path.display(),
            plans = plans_config.plans.len(),
            holiday_table = holiday_table.is_some(),
            "Loaded configuration files"
        );

        Self::from_parts(settings, plans_config.plans, holiday_table)
    }

    /// Builds configuration from already-parsed parts, applying the same
    /// validation as [`ConfigLoader::load`].
    pub fn from_parts(
        settings: CalculatorSettings,
        plans: Vec<GradingPlan>,
        holiday_table: Option<HolidayTableConfig>,
    ) -> EngineResult<Self> {
        if settings.currency.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "currency".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let plans = PlanTable::new(plans)?;

        let holidays = match holiday_table {
            Some(table) => {
                if !table.jurisdiction.eq_ignore_ascii_case(&settings.jurisdiction) {
                    return Err(EngineError::InvalidConfig {
                        field: "holidays.jurisdiction".to_string(),
                        message: format!(
                            "holiday table is for '{}' but calculator uses '{}'",
                            table.jurisdiction, settings.jurisdiction
                        ),
                    });
                }
                HolidayCalendar::from_table(&table)?
            }
            None => HolidayCalendar::for_jurisdiction(&settings.jurisdiction)?,
        };

        let calendar = BusinessCalendar::new(&settings.weekend, holidays)?;

        Ok(Self {
            settings,
            plans,
            calendar,
        })
    }

    /// PSA Japan defaults: the four standard plans, Japanese holidays, a
    /// Saturday/Sunday weekend and a 21-day intake delay.
    pub fn psa_japan() -> Self {
        Self {
            settings: CalculatorSettings::default(),
            plans: PlanTable::psa_japan(),
            calendar: BusinessCalendar::japan(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the calculator settings.
    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Returns the plan table.
    pub fn plans(&self) -> &PlanTable {
        &self.plans
    }

    /// Returns the business calendar built from the settings.
    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// Gets a plan by its exact name.
    pub fn get_plan(&self, name: &str) -> Option<&GradingPlan> {
        self.plans.get(name)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::psa_japan()
    }
}

//! Configuration loading and management for the turnaround calculator.
//!
//! This module loads the calculator settings, the grading plan table and an
//! optional explicit holiday table from YAML files, validating them once at
//! load time.
//!
//! # Example
//!
//! ```no_run
//! use card_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/psa_japan").unwrap();
//! println!("Intake delay: {} days", config.settings().intake_offset_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculatorSettings, DEFAULT_CURRENCY, DEFAULT_INTAKE_OFFSET_DAYS, HolidayEntry,
    HolidayTableConfig, PlanTable, PlansConfig,
};

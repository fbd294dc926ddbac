//! Application state for the card ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::TurnaroundCalculator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and the turnaround calculator built from it.
/// Both are immutable and shared between handlers behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calculator configuration.
    config: Arc<ConfigLoader>,
    /// The calculator built from `config`.
    calculator: Arc<TurnaroundCalculator>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let calculator = TurnaroundCalculator::from_config(&config);
        Self {
            config: Arc::new(config),
            calculator: Arc::new(calculator),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the turnaround calculator.
    pub fn calculator(&self) -> &TurnaroundCalculator {
        &self.calculator
    }

    /// Returns the configured currency code.
    pub fn currency(&self) -> &str {
        &self.config.settings().currency
    }
}

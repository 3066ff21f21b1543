//! Application state for the payroll API.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayrollConfig};

/// Shared application state.
///
/// Holds the read-only payroll configuration. Rosters live only for the
/// request that carries them.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        self.config.config()
    }
}

//! Configuration types for the payroll ledger.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_ORDINARY_HOURS_PER_DAY, DEFAULT_OVERTIME_MULTIPLIER, PayRules};

/// Currency label used when none is configured (Rwandan franc).
pub const DEFAULT_CURRENCY: &str = "RWF";

/// Payroll configuration.
///
/// Every field is optional in the YAML file; missing fields take the
/// built-in defaults.
///
/// ```yaml
/// currency: RWF
/// ordinary_hours_per_day: 8
/// overtime_multiplier: 1.5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Currency label printed next to amounts. Never used in arithmetic.
    pub currency: String,
    /// Daily threshold in hours before overtime applies.
    pub ordinary_hours_per_day: i32,
    /// Multiplier for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl PayrollConfig {
    /// Returns the pay rules described by this configuration.
    pub fn pay_rules(&self) -> PayRules {
        PayRules {
            ordinary_hours_per_day: self.ordinary_hours_per_day,
            overtime_multiplier: self.overtime_multiplier,
        }
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            ordinary_hours_per_day: DEFAULT_ORDINARY_HOURS_PER_DAY,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

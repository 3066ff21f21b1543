//! Configuration loading and management for the payroll ledger.
//!
//! This module provides functionality to load the payroll configuration
//! (currency label and overtime rules) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Overtime multiplier: {}", loader.config().overtime_multiplier);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_CURRENCY, PayrollConfig};

//! Calculation logic for the payroll ledger.
//!
//! This module contains the pay rules, the hourly pay calculation with daily
//! overtime, the salaried pay calculation and payroll report generation.

mod hourly_pay;
mod payroll_report;
mod rules;
mod salaried_pay;

pub use hourly_pay::{DayPay, HourlyPayResult, calculate_day_pay, calculate_hourly_pay};
pub use payroll_report::generate_report;
pub use rules::{DEFAULT_ORDINARY_HOURS_PER_DAY, DEFAULT_OVERTIME_MULTIPLIER, PayRules};
pub use salaried_pay::calculate_salaried_pay;

//! Core data models for the payroll ledger.
//!
//! This module contains the employee records, their work-day ledgers and
//! the payroll report produced from them.

mod date;
mod employee;
mod payroll_report;
mod work_day;

pub use date::WorkDate;
pub use employee::{Employee, EmployeeType, HourlyWorker, SalariedWorker};
pub use payroll_report::{PayrollReport, ReportLine};
pub use work_day::{WorkDayEntry, WorkDayLedger};

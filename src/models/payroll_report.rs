//! Payroll report models.
//!
//! A [`PayrollReport`] lists every employee in the order they were entered,
//! together with their description and computed pay. Totals are per
//! employee only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmployeeType;

/// One employee's line in the payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// 1-based position of the employee in entry order.
    pub position: usize,
    /// The employee's name.
    pub name: String,
    /// The employee's pay arrangement.
    pub employee_type: EmployeeType,
    /// The one-line description of the employee.
    pub description: String,
    /// Number of work days recorded for the employee.
    pub work_days: usize,
    /// The employee's computed pay.
    pub total_pay: Decimal,
}

/// The payroll report for a roster of employees.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::{EmployeeType, PayrollReport, ReportLine};
/// use rust_decimal::Decimal;
///
/// let report = PayrollReport {
///     report_id: uuid::Uuid::new_v4(),
///     generated_at: chrono::Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     currency: "RWF".to_string(),
///     lines: vec![ReportLine {
///         position: 1,
///         name: "Bob".to_string(),
///         employee_type: EmployeeType::Salaried,
///         description: "Salaried Employee: Bob | Monthly Salary: 500000 RWF".to_string(),
///         work_days: 0,
///         total_pay: Decimal::new(500_000, 0),
///     }],
/// };
/// assert_eq!(report.lines.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the crate that produced the report.
    pub engine_version: String,
    /// Currency label for all amounts.
    pub currency: String,
    /// One line per employee, in entry order.
    pub lines: Vec<ReportLine>,
}

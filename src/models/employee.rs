//! Employee model and related types.
//!
//! An [`Employee`] is one of two record shapes: an hourly worker paid per
//! hour with daily overtime, or a salaried worker paid a fixed monthly
//! amount. Both own a [`WorkDayLedger`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{PayRules, calculate_hourly_pay, calculate_salaried_pay};
use crate::config::DEFAULT_CURRENCY;
use crate::error::PayrollError;

use super::{WorkDate, WorkDayEntry, WorkDayLedger};

/// Represents the kind of pay arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Paid per hour worked, with overtime above the daily threshold.
    Hourly,
    /// Paid a fixed monthly salary.
    Salaried,
}

impl EmployeeType {
    /// Returns the label used for this type in input and output.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeType::Hourly => "hourly",
            EmployeeType::Salaried => "salaried",
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmployeeType {
    type Err = PayrollError;

    /// Parses `hourly` or `salaried`. Anything else is rejected.
    ///
    /// ```
    /// use payroll_ledger::models::EmployeeType;
    ///
    /// assert_eq!("hourly".parse::<EmployeeType>().unwrap(), EmployeeType::Hourly);
    /// assert!("manager".parse::<EmployeeType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hourly" => Ok(EmployeeType::Hourly),
            "salaried" => Ok(EmployeeType::Salaried),
            other => Err(PayrollError::UnknownEmployeeType {
                label: other.to_string(),
            }),
        }
    }
}

/// A worker paid by the hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyWorker {
    name: String,
    hourly_rate: Decimal,
    #[serde(default)]
    work_days: WorkDayLedger,
}

/// A worker paid a fixed monthly salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalariedWorker {
    name: String,
    monthly_salary: Decimal,
    #[serde(default)]
    work_days: WorkDayLedger,
}

/// An employee record.
///
/// The name and rate or salary are fixed at construction. Afterwards the
/// record only changes through its work-day ledger.
///
/// # Examples
///
/// ```
/// use payroll_ledger::models::{Employee, WorkDate};
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::hourly("Alice", Decimal::new(2000, 0));
/// employee.add_work_day(WorkDate::new(1, 1, 2024), 9);
/// employee.add_work_day(WorkDate::new(2, 1, 2024), 4);
///
/// assert_eq!(employee.calculate_pay(), Decimal::new(27000, 0));
/// assert_eq!(employee.describe(), "Hourly Employee: Alice | Rate: 2000 RWF/hour");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "employee_type", rename_all = "snake_case")]
pub enum Employee {
    /// An hourly worker.
    Hourly(HourlyWorker),
    /// A salaried worker.
    Salaried(SalariedWorker),
}

impl Employee {
    /// Creates an employee of the given type with an empty ledger.
    ///
    /// `rate_or_salary` is the hourly rate for hourly workers and the
    /// monthly salary for salaried workers.
    pub fn new(name: impl Into<String>, employee_type: EmployeeType, rate_or_salary: Decimal) -> Self {
        match employee_type {
            EmployeeType::Hourly => Self::hourly(name, rate_or_salary),
            EmployeeType::Salaried => Self::salaried(name, rate_or_salary),
        }
    }

    /// Creates an hourly worker with an empty ledger.
    pub fn hourly(name: impl Into<String>, hourly_rate: Decimal) -> Self {
        Employee::Hourly(HourlyWorker {
            name: name.into(),
            hourly_rate,
            work_days: WorkDayLedger::new(),
        })
    }

    /// Creates a salaried worker with an empty ledger.
    pub fn salaried(name: impl Into<String>, monthly_salary: Decimal) -> Self {
        Employee::Salaried(SalariedWorker {
            name: name.into(),
            monthly_salary,
            work_days: WorkDayLedger::new(),
        })
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        match self {
            Employee::Hourly(w) => &w.name,
            Employee::Salaried(w) => &w.name,
        }
    }

    /// Returns which pay arrangement this employee is on.
    pub fn employee_type(&self) -> EmployeeType {
        match self {
            Employee::Hourly(_) => EmployeeType::Hourly,
            Employee::Salaried(_) => EmployeeType::Salaried,
        }
    }

    /// Returns the hourly rate or the monthly salary.
    pub fn rate_or_salary(&self) -> Decimal {
        match self {
            Employee::Hourly(w) => w.hourly_rate,
            Employee::Salaried(w) => w.monthly_salary,
        }
    }

    /// Returns the employee's work-day ledger.
    pub fn work_days(&self) -> &WorkDayLedger {
        match self {
            Employee::Hourly(w) => &w.work_days,
            Employee::Salaried(w) => &w.work_days,
        }
    }

    /// Returns the employee's work-day ledger for editing.
    pub fn work_days_mut(&mut self) -> &mut WorkDayLedger {
        match self {
            Employee::Hourly(w) => &mut w.work_days,
            Employee::Salaried(w) => &mut w.work_days,
        }
    }

    /// Records a work day at the end of the ledger.
    pub fn add_work_day(&mut self, date: WorkDate, hours: i32) {
        self.work_days_mut().append(WorkDayEntry::new(date, hours));
    }

    /// Removes the work day at `index`. Out-of-range indices are ignored.
    pub fn remove_work_day(&mut self, index: usize) -> Option<WorkDayEntry> {
        self.work_days_mut().remove_at(index)
    }

    /// Calculates pay under the default rules.
    pub fn calculate_pay(&self) -> Decimal {
        self.calculate_pay_with(&PayRules::default())
    }

    /// Calculates pay under the given rules.
    ///
    /// The rules only affect hourly workers.
    pub fn calculate_pay_with(&self, rules: &PayRules) -> Decimal {
        match self {
            Employee::Hourly(w) => calculate_hourly_pay(&w.work_days, w.hourly_rate, rules).total_pay,
            Employee::Salaried(w) => calculate_salaried_pay(w.monthly_salary, &w.work_days),
        }
    }

    /// Returns a one-line summary of the employee in the default currency.
    pub fn describe(&self) -> String {
        self.describe_in(DEFAULT_CURRENCY)
    }

    /// Returns a one-line summary of the employee using `currency` as the label.
    pub fn describe_in(&self, currency: &str) -> String {
        match self {
            Employee::Hourly(w) => format!(
                "Hourly Employee: {} | Rate: {} {}/hour",
                w.name,
                w.hourly_rate.normalize(),
                currency
            ),
            Employee::Salaried(w) => format!(
                "Salaried Employee: {} | Monthly Salary: {} {}",
                w.name,
                w.monthly_salary.normalize(),
                currency
            ),
        }
    }
}

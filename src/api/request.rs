//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the `/payroll/report`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::{Employee, EmployeeType, WorkDate};

/// Request body for the `/payroll/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employees to report on, in the order they should be listed.
    pub employees: Vec<EmployeeRequest>,
}

/// Employee information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's name.
    pub name: String,
    /// The pay arrangement label, `hourly` or `salaried`.
    pub employee_type: String,
    /// Hourly rate for hourly workers, monthly salary for salaried workers.
    pub rate: Decimal,
    /// Work days recorded for the employee.
    #[serde(default)]
    pub work_days: Vec<WorkDayRequest>,
}

/// A work day in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkDayRequest {
    /// The date worked.
    pub date: WorkDate,
    /// Hours worked on that date.
    pub hours: i32,
}

impl TryFrom<EmployeeRequest> for Employee {
    type Error = PayrollError;

    fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
        let employee_type: EmployeeType = req.employee_type.parse()?;
        let mut employee = Employee::new(req.name, employee_type, req.rate);
        for day in req.work_days {
            employee.add_work_day(day.date, day.hours);
        }
        Ok(employee)
    }
}

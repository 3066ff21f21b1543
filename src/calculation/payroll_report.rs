//! Payroll report generation.
//!
//! Builds a [`PayrollReport`] from a roster by describing each employee and
//! calculating their pay under the configured rules.

use chrono::Utc;
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::models::{Employee, PayrollReport, ReportLine};

/// Generates the payroll report for a roster, keeping entry order.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::generate_report;
/// use payroll_ledger::config::PayrollConfig;
/// use payroll_ledger::models::Employee;
/// use rust_decimal::Decimal;
///
/// let roster = vec![Employee::salaried("Bob", Decimal::new(500_000, 0))];
/// let report = generate_report(&roster, &PayrollConfig::default());
///
/// assert_eq!(report.lines[0].position, 1);
/// assert_eq!(report.lines[0].total_pay, Decimal::new(500_000, 0));
/// ```
pub fn generate_report(employees: &[Employee], config: &PayrollConfig) -> PayrollReport {
    let rules = config.pay_rules();

    let lines = employees
        .iter()
        .enumerate()
        .map(|(i, employee)| ReportLine {
            position: i + 1,
            name: employee.name().to_string(),
            employee_type: employee.employee_type(),
            description: employee.describe_in(&config.currency),
            work_days: employee.work_days().len(),
            total_pay: employee.calculate_pay_with(&rules),
        })
        .collect();

    PayrollReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        currency: config.currency.clone(),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeType, WorkDate};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn roster() -> Vec<Employee> {
        let mut alice = Employee::hourly("Alice", dec("2000"));
        alice.add_work_day(WorkDate::new(1, 1, 2024), 9);
        alice.add_work_day(WorkDate::new(2, 1, 2024), 4);

        let bob = Employee::salaried("Bob", dec("500000"));

        vec![alice, bob]
    }

    #[test]
    fn test_report_lines_follow_entry_order() {
        let report = generate_report(&roster(), &PayrollConfig::default());

        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].name, "Alice");
        assert_eq!(report.lines[0].position, 1);
        assert_eq!(report.lines[1].name, "Bob");
        assert_eq!(report.lines[1].position, 2);
    }

    #[test]
    fn test_report_pay_and_descriptions() {
        let report = generate_report(&roster(), &PayrollConfig::default());

        let alice = &report.lines[0];
        assert_eq!(alice.employee_type, EmployeeType::Hourly);
        assert_eq!(alice.work_days, 2);
        assert_eq!(alice.total_pay, dec("27000"));
        assert_eq!(alice.description, "Hourly Employee: Alice | Rate: 2000 RWF/hour");

        let bob = &report.lines[1];
        assert_eq!(bob.work_days, 0);
        assert_eq!(bob.total_pay, dec("500000"));
    }

    #[test]
    fn test_report_uses_configured_currency_and_rules() {
        let config = PayrollConfig {
            currency: "KES".to_string(),
            ordinary_hours_per_day: 4,
            overtime_multiplier: dec("2"),
        };
        let report = generate_report(&roster(), &config);

        assert_eq!(report.currency, "KES");
        // 4 * 2000 + 5 * 2000 * 2, then 4 * 2000
        assert_eq!(report.lines[0].total_pay, dec("36000"));
        assert!(report.lines[1].description.ends_with("500000 KES"));
    }

    #[test]
    fn test_empty_roster() {
        let report = generate_report(&[], &PayrollConfig::default());
        assert!(report.lines.is_empty());
        assert_eq!(report.currency, "RWF");
    }
}

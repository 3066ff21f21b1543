//! Text rendering for work-day listings and the payroll report.

use std::io::Write;

use crate::error::PayrollResult;
use crate::models::{Employee, PayrollReport};

const RULE: &str = "=================================";

/// Writes a centred banner between two rules.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> PayrollResult<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  {}  ", title)?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// Lists an employee's work days with their ledger indices.
///
/// ```
/// use payroll_ledger::console::write_work_days;
/// use payroll_ledger::models::{Employee, WorkDate};
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::hourly("Alice", Decimal::new(2000, 0));
/// employee.add_work_day(WorkDate::new(1, 1, 2024), 9);
///
/// let mut out = Vec::new();
/// write_work_days(&mut out, &employee).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("[0] Date: 1/1/2024 | Hours: 9"));
/// ```
pub fn write_work_days<W: Write>(out: &mut W, employee: &Employee) -> PayrollResult<()> {
    writeln!(out, "Workdays for {}:", employee.name())?;
    let ledger = employee.work_days();
    for (index, entry) in ledger.iter().enumerate() {
        writeln!(out, "  [{}] Date: {} | Hours: {}", index, entry.date, entry.hours)?;
    }
    if ledger.is_empty() {
        writeln!(out, "  No workdays recorded.")?;
    }
    Ok(())
}

/// Writes the payroll report: one block per employee, in entry order.
pub fn write_report<W: Write>(out: &mut W, report: &PayrollReport) -> PayrollResult<()> {
    writeln!(out)?;
    writeln!(out)?;
    write_banner(out, "       PAYROLL REPORT       ")?;
    for line in &report.lines {
        writeln!(out)?;
        writeln!(out, "--- EMPLOYEE #{} ---", line.position)?;
        writeln!(out, "{}", line.description)?;
        writeln!(out, "Total Pay: {} {}", line.total_pay.normalize(), report.currency)?;
    }
    writeln!(out)?;
    write_banner(out, "END OF PAYROLL PROCESSING")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::generate_report;
    use crate::config::PayrollConfig;
    use crate::models::WorkDate;
    use rust_decimal::Decimal;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> PayrollResult<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_work_days_listing() {
        let mut employee = Employee::hourly("Alice", Decimal::new(2000, 0));
        employee.add_work_day(WorkDate::new(1, 1, 2024), 9);
        employee.add_work_day(WorkDate::new(2, 1, 2024), 4);

        let text = render(|out| write_work_days(out, &employee));
        assert_eq!(
            text,
            "Workdays for Alice:\n  [0] Date: 1/1/2024 | Hours: 9\n  [1] Date: 2/1/2024 | Hours: 4\n"
        );
    }

    #[test]
    fn test_empty_work_days_listing() {
        let employee = Employee::salaried("Bob", Decimal::new(500_000, 0));
        let text = render(|out| write_work_days(out, &employee));
        assert!(text.contains("No workdays recorded."));
    }

    #[test]
    fn test_report_blocks() {
        let mut alice = Employee::hourly("Alice", Decimal::new(2000, 0));
        alice.add_work_day(WorkDate::new(1, 1, 2024), 9);
        alice.add_work_day(WorkDate::new(2, 1, 2024), 4);
        let bob = Employee::salaried("Bob", Decimal::new(500_000, 0));

        let report = generate_report(&[alice, bob], &PayrollConfig::default());
        let text = render(|out| write_report(out, &report));

        assert!(text.contains("PAYROLL REPORT"));
        assert!(text.contains(
            "--- EMPLOYEE #1 ---\nHourly Employee: Alice | Rate: 2000 RWF/hour\nTotal Pay: 27000 RWF\n"
        ));
        assert!(text.contains(
            "--- EMPLOYEE #2 ---\nSalaried Employee: Bob | Monthly Salary: 500000 RWF\nTotal Pay: 500000 RWF\n"
        ));
        assert!(text.contains("END OF PAYROLL PROCESSING"));
    }
}

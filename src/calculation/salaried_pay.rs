//! Salaried pay calculation.
//!
//! Salaried workers are paid their fixed monthly salary. Work days are kept
//! in their ledger for record-keeping only and never change the amount.

use rust_decimal::Decimal;

use crate::models::WorkDayLedger;

/// Returns the pay for a salaried worker: the monthly salary, unchanged.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::calculate_salaried_pay;
/// use payroll_ledger::models::WorkDayLedger;
/// use rust_decimal::Decimal;
///
/// let salary = Decimal::new(500_000, 0);
/// assert_eq!(calculate_salaried_pay(salary, &WorkDayLedger::new()), salary);
/// ```
pub fn calculate_salaried_pay(monthly_salary: Decimal, _ledger: &WorkDayLedger) -> Decimal {
    monthly_salary
}

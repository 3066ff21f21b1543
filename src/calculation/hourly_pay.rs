//! Hourly pay calculation with daily overtime.
//!
//! Each work day is split into ordinary hours (up to the daily threshold) and
//! overtime hours (anything above it). Ordinary hours are paid at the hourly
//! rate and overtime hours at the rate times the overtime multiplier. The
//! day amounts are then summed across the ledger.
//!
//! Hours are not clamped. Zero hours pay nothing and negative hours produce a
//! negative amount, since `min(hours, threshold)` passes them straight through.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{WorkDate, WorkDayEntry, WorkDayLedger};

use super::PayRules;

/// Pay breakdown for a single work day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPay {
    /// The date of the work day.
    pub date: WorkDate,
    /// Total hours recorded for the day.
    pub hours: i32,
    /// Hours paid at the ordinary rate.
    pub ordinary_hours: i32,
    /// Hours paid at the overtime rate.
    pub overtime_hours: i32,
    /// Pay for the ordinary hours.
    pub ordinary_pay: Decimal,
    /// Pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// Ordinary pay plus overtime pay.
    pub amount: Decimal,
}

/// The result of calculating hourly pay over a whole ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPayResult {
    /// One breakdown per ledger entry, in ledger order.
    pub days: Vec<DayPay>,
    /// Sum of ordinary hours across all days.
    pub ordinary_hours: i64,
    /// Sum of overtime hours across all days.
    pub overtime_hours: i64,
    /// Sum of all day amounts.
    pub total_pay: Decimal,
}

/// Calculates the pay for one work day.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::{calculate_day_pay, PayRules};
/// use payroll_ledger::models::{WorkDate, WorkDayEntry};
/// use rust_decimal::Decimal;
///
/// let entry = WorkDayEntry::new(WorkDate::new(1, 1, 2024), 10);
/// let day = calculate_day_pay(&entry, Decimal::new(1000, 0), &PayRules::default());
///
/// assert_eq!(day.ordinary_hours, 8);
/// assert_eq!(day.overtime_hours, 2);
/// assert_eq!(day.amount, Decimal::new(11000, 0));
/// ```
pub fn calculate_day_pay(entry: &WorkDayEntry, hourly_rate: Decimal, rules: &PayRules) -> DayPay {
    let threshold = rules.ordinary_hours_per_day;

    let ordinary_hours = entry.hours.min(threshold);
    let overtime_hours = entry.hours.saturating_sub(threshold).max(0);

    let ordinary_pay = Decimal::from(ordinary_hours).saturating_mul(hourly_rate);
    let overtime_pay = Decimal::from(overtime_hours)
        .saturating_mul(hourly_rate)
        .saturating_mul(rules.overtime_multiplier);

    DayPay {
        date: entry.date,
        hours: entry.hours,
        ordinary_hours,
        overtime_hours,
        ordinary_pay,
        overtime_pay,
        amount: ordinary_pay.saturating_add(overtime_pay),
    }
}

/// Calculates hourly pay for every entry in a ledger.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::{calculate_hourly_pay, PayRules};
/// use payroll_ledger::models::{WorkDate, WorkDayEntry, WorkDayLedger};
/// use rust_decimal::Decimal;
///
/// let mut ledger = WorkDayLedger::new();
/// ledger.append(WorkDayEntry::new(WorkDate::new(1, 1, 2024), 9));
/// ledger.append(WorkDayEntry::new(WorkDate::new(2, 1, 2024), 4));
///
/// let result = calculate_hourly_pay(&ledger, Decimal::new(2000, 0), &PayRules::default());
/// assert_eq!(result.total_pay, Decimal::new(27000, 0));
/// ```
pub fn calculate_hourly_pay(
    ledger: &WorkDayLedger,
    hourly_rate: Decimal,
    rules: &PayRules,
) -> HourlyPayResult {
    let days: Vec<DayPay> = ledger
        .iter()
        .map(|entry| calculate_day_pay(entry, hourly_rate, rules))
        .collect();

    let ordinary_hours = days.iter().map(|d| i64::from(d.ordinary_hours)).sum();
    let overtime_hours = days.iter().map(|d| i64::from(d.overtime_hours)).sum();
    let total_pay = days
        .iter()
        .fold(Decimal::ZERO, |acc, d| acc.saturating_add(d.amount));

    HourlyPayResult {
        days,
        ordinary_hours,
        overtime_hours,
        total_pay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(hours: i32) -> WorkDayEntry {
        WorkDayEntry::new(WorkDate::new(1, 1, 2024), hours)
    }

    fn day_amount(hours: i32, rate: &str) -> Decimal {
        calculate_day_pay(&entry(hours), dec(rate), &PayRules::default()).amount
    }

    #[test]
    fn test_under_threshold_pays_ordinary_rate() {
        assert_eq!(day_amount(6, "1000"), dec("6000"));
    }

    #[test]
    fn test_exactly_threshold_has_no_overtime() {
        let day = calculate_day_pay(&entry(8), dec("1000"), &PayRules::default());
        assert_eq!(day.ordinary_hours, 8);
        assert_eq!(day.overtime_hours, 0);
        assert_eq!(day.overtime_pay, Decimal::ZERO);
        assert_eq!(day.amount, dec("8000"));
    }

    #[test]
    fn test_ten_hours_at_1000() {
        // 8 * 1000 + 2 * 1000 * 1.5
        assert_eq!(day_amount(10, "1000"), dec("11000"));
    }

    #[test]
    fn test_one_overtime_hour() {
        let day = calculate_day_pay(&entry(9), dec("2000"), &PayRules::default());
        assert_eq!(day.ordinary_pay, dec("16000"));
        assert_eq!(day.overtime_pay, dec("3000"));
        assert_eq!(day.amount, dec("19000"));
    }

    #[test]
    fn test_zero_hours_pays_nothing() {
        assert_eq!(day_amount(0, "1500"), Decimal::ZERO);
    }

    #[test]
    fn test_negative_hours_are_not_clamped() {
        let day = calculate_day_pay(&entry(-3), dec("1000"), &PayRules::default());
        assert_eq!(day.ordinary_hours, -3);
        assert_eq!(day.overtime_hours, 0);
        assert_eq!(day.amount, dec("-3000"));
    }

    #[test]
    fn test_negative_rate_propagates() {
        assert_eq!(day_amount(10, "-100"), dec("-1100"));
    }

    #[test]
    fn test_fractional_rate() {
        // 8 * 12.50 + 1 * 12.50 * 1.5 = 100 + 18.75
        assert_eq!(day_amount(9, "12.50"), dec("118.75"));
    }

    #[test]
    fn test_ledger_total_sums_days() {
        let ledger: WorkDayLedger = [entry(9), entry(4)].into_iter().collect();
        let result = calculate_hourly_pay(&ledger, dec("2000"), &PayRules::default());

        assert_eq!(result.days.len(), 2);
        assert_eq!(result.ordinary_hours, 12);
        assert_eq!(result.overtime_hours, 1);
        assert_eq!(result.total_pay, dec("27000"));
    }

    #[test]
    fn test_empty_ledger_pays_nothing() {
        let result = calculate_hourly_pay(&WorkDayLedger::new(), dec("2000"), &PayRules::default());
        assert!(result.days.is_empty());
        assert_eq!(result.total_pay, Decimal::ZERO);
    }

    #[test]
    fn test_custom_rules() {
        let rules = PayRules {
            ordinary_hours_per_day: 7,
            overtime_multiplier: dec("2"),
        };
        let day = calculate_day_pay(&entry(9), dec("100"), &rules);
        assert_eq!(day.ordinary_hours, 7);
        assert_eq!(day.overtime_hours, 2);
        assert_eq!(day.amount, dec("1100"));
    }

    #[test]
    fn test_extreme_hours_do_not_overflow() {
        let day = calculate_day_pay(&entry(i32::MIN), dec("1"), &PayRules::default());
        assert_eq!(day.overtime_hours, 0);
        assert_eq!(day.amount, Decimal::from(i32::MIN));
    }
}

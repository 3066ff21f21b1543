//! Pay rules shared by the pay calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours per day paid at the ordinary rate before overtime applies.
pub const DEFAULT_ORDINARY_HOURS_PER_DAY: i32 = 8;

/// Multiplier applied to the hourly rate for overtime hours (150%).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The rules that turn a work-day ledger into hourly pay.
///
/// # Example
///
/// ```
/// use payroll_ledger::calculation::PayRules;
/// use rust_decimal::Decimal;
///
/// let rules = PayRules::default();
/// assert_eq!(rules.ordinary_hours_per_day, 8);
/// assert_eq!(rules.overtime_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRules {
    /// Daily threshold in hours; hours above it are overtime.
    pub ordinary_hours_per_day: i32,
    /// Multiplier for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            ordinary_hours_per_day: DEFAULT_ORDINARY_HOURS_PER_DAY,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_multiplier_is_one_and_a_half() {
        assert_eq!(DEFAULT_OVERTIME_MULTIPLIER, Decimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_default_rules() {
        let rules = PayRules::default();
        assert_eq!(rules.ordinary_hours_per_day, DEFAULT_ORDINARY_HOURS_PER_DAY);
        assert_eq!(rules.overtime_multiplier, DEFAULT_OVERTIME_MULTIPLIER);
    }
}

//! Parsers for console answers.
//!
//! Each parser takes one line as typed and returns either the value or an
//! `InvalidInput` error naming the field, so the prompt can ask again.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::WorkDate;

fn invalid(field: &str, message: impl Into<String>) -> PayrollError {
    PayrollError::InvalidInput {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Parses a non-negative count such as a number of employees or work days.
pub fn parse_count(line: &str, field: &str) -> PayrollResult<usize> {
    line.trim()
        .parse::<usize>()
        .map_err(|_| invalid(field, "expected a whole number of zero or more"))
}

/// Parses a whole number, which may be negative.
pub fn parse_integer(line: &str, field: &str) -> PayrollResult<i64> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| invalid(field, "expected a whole number"))
}

/// Parses an hours-worked value. Negative hours are accepted.
pub fn parse_hours(line: &str) -> PayrollResult<i32> {
    line.trim()
        .parse::<i32>()
        .map_err(|_| invalid("hours worked", "expected a whole number of hours"))
}

/// Parses a monetary amount such as an hourly rate or a salary.
///
/// Plain decimals (`2000`, `12.50`, `-5`) and scientific notation (`5e5`)
/// are accepted.
pub fn parse_amount(line: &str, field: &str) -> PayrollResult<Decimal> {
    let text = line.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| invalid(field, "expected a number"))
}

/// Parses a `dd mm yyyy` date. Slashes may be used instead of spaces.
///
/// The date is not checked against the calendar.
///
/// ```
/// use payroll_ledger::console::parse_date;
/// use payroll_ledger::models::WorkDate;
///
/// assert_eq!(parse_date("1 1 2024").unwrap(), WorkDate::new(1, 1, 2024));
/// assert_eq!(parse_date("31/2/2024").unwrap(), WorkDate::new(31, 2, 2024));
/// ```
pub fn parse_date(line: &str) -> PayrollResult<WorkDate> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == '/')
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != 3 {
        return Err(invalid("date", "expected day, month and year (dd mm yyyy)"));
    }

    let mut fields = [0i32; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        *slot = part
            .parse::<i32>()
            .map_err(|_| invalid("date", format!("'{}' is not a number", part)))?;
    }

    Ok(WorkDate::new(fields[0], fields[1], fields[2]))
}

/// An action chosen from the work-day editing menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a work day.
    Add,
    /// Remove a work day.
    Remove,
    /// Stop editing.
    Quit,
}

/// Parses a menu answer by its first non-blank character.
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().chars().next()? {
        'a' => Some(MenuChoice::Add),
        'r' => Some(MenuChoice::Remove),
        'q' => Some(MenuChoice::Quit),
        _ => None,
    }
}

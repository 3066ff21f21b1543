//! Work date model.
//!
//! Dates are recorded exactly as entered. No calendar validation is applied,
//! so impossible dates such as 31/2/2024 are stored as-is.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A day/month/year triple attached to a work-day entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkDate {
    /// Day of the month as entered.
    pub day: i32,
    /// Month of the year as entered.
    pub month: i32,
    /// Year as entered.
    pub year: i32,
}

impl WorkDate {
    /// Creates a work date without checking that it exists on the calendar.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::WorkDate;
    ///
    /// let date = WorkDate::new(1, 1, 2024);
    /// assert_eq!(date.to_string(), "1/1/2024");
    /// ```
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Returns the calendar date, if the triple names a real one.
    ///
    /// This is informational only; ledgers accept dates that return `None`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl fmt::Display for WorkDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

//! Work-day entries and the per-employee ledger that holds them.
//!
//! A [`WorkDayLedger`] keeps entries in the order they were entered. Entries
//! are identified by position only, so removing one shifts every later entry
//! down by one.

use serde::{Deserialize, Serialize};

use super::WorkDate;

/// One day of recorded work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDayEntry {
    /// The date the hours were worked.
    pub date: WorkDate,
    /// Hours worked on that date. Not clamped; negative values are kept.
    pub hours: i32,
}

impl WorkDayEntry {
    /// Creates an entry from a date and a number of hours.
    pub fn new(date: WorkDate, hours: i32) -> Self {
        Self { date, hours }
    }
}

/// Ordered, growable collection of work-day entries for one employee.
///
/// # Examples
///
/// ```
/// use payroll_ledger::models::{WorkDate, WorkDayEntry, WorkDayLedger};
///
/// let mut ledger = WorkDayLedger::new();
/// ledger.append(WorkDayEntry::new(WorkDate::new(1, 1, 2024), 9));
/// ledger.append(WorkDayEntry::new(WorkDate::new(2, 1, 2024), 4));
/// assert_eq!(ledger.len(), 2);
///
/// // Out-of-range removals leave the ledger untouched.
/// assert!(ledger.remove_at(5).is_none());
/// assert_eq!(ledger.len(), 2);
///
/// let removed = ledger.remove_at(0).unwrap();
/// assert_eq!(removed.hours, 9);
/// assert_eq!(ledger.entries()[0].hours, 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkDayLedger {
    entries: Vec<WorkDayEntry>,
}

impl WorkDayLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry after all existing entries.
    pub fn append(&mut self, entry: WorkDayEntry) {
        self.entries.push(entry);
    }

    /// Removes the entry at `index`, shifting later entries down.
    ///
    /// An index past the end is ignored and `None` is returned; this is not
    /// treated as an error.
    pub fn remove_at(&mut self, index: usize) -> Option<WorkDayEntry> {
        if index >= self.entries.len() {
            return None;
        }
        Some(self.entries.remove(index))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a read-only view of the entries in insertion order.
    pub fn entries(&self) -> &[WorkDayEntry] {
        &self.entries
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, WorkDayEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a WorkDayLedger {
    type Item = &'a WorkDayEntry;
    type IntoIter = std::slice::Iter<'a, WorkDayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<WorkDayEntry> for WorkDayLedger {
    fn from_iter<I: IntoIterator<Item = WorkDayEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

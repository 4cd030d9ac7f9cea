//! In-memory expense store
//!
//! Holds every expense of the session in insertion order. The store only
//! grows: records are appended and scanned, never edited or removed.

use crate::models::{ExpenseRecord, Money};

/// Ordered collection of expense records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the store
    pub fn push(&mut self, record: ExpenseRecord) -> &ExpenseRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of every record's amount, complete or not
    ///
    /// Returns `None` if the total does not fit in a [`Money`].
    pub fn total(&self) -> Option<Money> {
        Money::checked_sum(self.records.iter().map(ExpenseRecord::amount))
    }
}

impl From<Vec<ExpenseRecord>> for ExpenseStore {
    fn from(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a ExpenseStore {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

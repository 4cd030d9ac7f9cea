//! Expense service
//!
//! Assembles validated input into expense records, appends them to the
//! store, and selects which records are shown to the user.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Category, ExpenseRecord, Money};
use crate::storage::ExpenseStore;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub date: NaiveDate,
    pub categories: Vec<Category>,
    pub amount: Money,
    pub description: String,
}

/// How a stored record should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseView<'a> {
    /// All four fields are present
    Shown(&'a ExpenseRecord),
    /// The record is missing a field and is not displayed
    Skipped,
}

/// Service for expense entry and listing
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Create a record from input and append it to the store
    pub fn add(&mut self, input: CreateExpenseInput) -> &ExpenseRecord {
        let record = ExpenseRecord::new(
            input.date,
            &input.categories,
            input.amount,
            input.description,
        );
        debug!(date = record.date(), amount = %record.amount(), "adding expense");
        self.store.push(record)
    }
}

/// Map every record in store order to how it should be displayed
pub fn list_expenses(store: &ExpenseStore) -> Vec<ExpenseView<'_>> {
    store
        .iter()
        .map(|record| {
            if record.is_complete() {
                ExpenseView::Shown(record)
            } else {
                ExpenseView::Skipped
            }
        })
        .collect()
}

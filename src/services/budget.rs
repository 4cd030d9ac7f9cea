//! Budget tracking service
//!
//! Compares total recorded spend against a monthly budget.

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::storage::ExpenseStore;

/// Where spending stands relative to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Spending is above the budget
    Exceeded,
    /// Spending is at or below the budget; `remaining` is budget minus total
    Within { remaining: Money },
}

/// Result of comparing spend to a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetReport {
    pub total: Money,
    pub budget: Money,
    pub status: BudgetStatus,
}

impl BudgetReport {
    pub fn is_exceeded(&self) -> bool {
        matches!(self.status, BudgetStatus::Exceeded)
    }
}

/// Service for budget comparisons
pub struct BudgetService<'a> {
    store: &'a ExpenseStore,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Compare total spend against `budget`
    ///
    /// The total covers every record in the store, including records that
    /// are hidden from the listing because a field was missing on load.
    /// Fails with `AmountOverflow` if the total or the remainder is out of
    /// range.
    pub fn track(&self, budget: Money) -> ExpenseResult<BudgetReport> {
        let total = self
            .store
            .total()
            .ok_or(ExpenseError::AmountOverflow("total spent"))?;

        let status = if total > budget {
            BudgetStatus::Exceeded
        } else {
            let remaining = budget
                .checked_sub(total)
                .ok_or(ExpenseError::AmountOverflow("remaining budget"))?;
            BudgetStatus::Within { remaining }
        };

        debug!(%total, %budget, ?status, "tracked budget");
        Ok(BudgetReport {
            total,
            budget,
            status,
        })
    }
}

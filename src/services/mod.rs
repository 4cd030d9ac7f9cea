//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! record assembly, listing rules, and budget comparison.

pub mod budget;
pub mod expense;

pub use budget::{BudgetReport, BudgetService, BudgetStatus};
pub use expense::{list_expenses, CreateExpenseInput, ExpenseService, ExpenseView};

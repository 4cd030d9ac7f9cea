//! Expense display formatting
//!
//! Formats the expense listing for terminal output.

use crate::services::{list_expenses, ExpenseView};
use crate::storage::ExpenseStore;

/// Line printed in place of a record that cannot be displayed
pub const INCOMPLETE_NOTICE: &str = "Incomplete expense entry found, skipping...";

/// Format every expense in store order, one per line
pub fn format_expense_list(store: &ExpenseStore) -> String {
    if store.is_empty() {
        return "No expenses to display.\n".to_string();
    }

    let mut output = String::new();
    for view in list_expenses(store) {
        match view {
            ExpenseView::Shown(record) => output.push_str(&format!("{}\n", record)),
            ExpenseView::Skipped => {
                output.push_str(INCOMPLETE_NOTICE);
                output.push('\n');
            }
        }
    }

    output
}

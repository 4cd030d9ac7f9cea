//! Display formatting for terminal output
//!
//! Renders expenses, categories and budget reports as plain text blocks.

pub mod budget;
pub mod category;
pub mod expense;

pub use budget::format_budget_report;
pub use category::format_category_menu;
pub use expense::format_expense_list;

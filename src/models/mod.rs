//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain: expense
//! records, the fixed category set, date validation and money amounts.

pub mod category;
pub mod date;
pub mod expense;
pub mod money;

pub use category::{parse_selection, Category, CategorySelectionError};
pub use date::{parse_date, validate_date, DateParseError};
pub use expense::ExpenseRecord;
pub use money::{Money, MoneyParseError};

//! Storage layer for the expense tracker
//!
//! An in-memory store for the session plus CSV persistence with atomic
//! writes.

pub mod csv_file;
pub mod store;

pub use csv_file::{load_expenses, save_expenses, LoadOutcome};
pub use store::ExpenseStore;

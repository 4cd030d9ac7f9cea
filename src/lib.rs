//! Expense Tracker - interactive terminal expense tracking
//!
//! This library provides the core functionality for a single-user expense
//! tracker: dated, categorized expenses are recorded in a CSV file and
//! compared against a monthly budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the expenses file
//! - `error`: Custom error types
//! - `models`: Expense records, categories, dates and money
//! - `storage`: In-memory store and CSV persistence
//! - `services`: Record assembly and budget comparison
//! - `display`: Plain-text formatting for terminal output
//! - `cli`: Menu loop and interactive prompts
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::cli::{Prompter, Session};
//! use expense_tracker::config::ExpensePaths;
//!
//! let mut prompter = Prompter::new(std::io::stdin().lock(), std::io::stdout());
//! let mut session = Session::open(ExpensePaths::new(None)?, &mut prompter)?;
//! session.run(&mut prompter)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

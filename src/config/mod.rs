//! Configuration module for the expense tracker
//!
//! Resolves where the expenses file lives. Command-line and environment
//! overrides are parsed in `main` and handed to [`ExpensePaths`].

pub mod paths;

pub use paths::ExpensePaths;

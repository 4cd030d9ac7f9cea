//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--file` flag or `EXPENSE_TRACKER_FILE` environment variable (if set)
//! 2. `expenses.csv` in the current working directory

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// File name used when no override is given
pub const DEFAULT_FILE_NAME: &str = "expenses.csv";

/// Manages the paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// CSV file holding all expenses
    data_file: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths, honouring an optional explicit data file
    ///
    /// # Errors
    ///
    /// Returns an error if the override is empty or names a directory.
    pub fn new(data_file: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let data_file = match data_file {
            Some(path) if path.as_os_str().is_empty() => {
                return Err(ExpenseError::Config("Data file path is empty".into()));
            }
            Some(path) => path,
            None => PathBuf::from(DEFAULT_FILE_NAME),
        };

        if data_file.is_dir() {
            return Err(ExpenseError::Config(format!(
                "Data file path is a directory: {}",
                data_file.display()
            )));
        }

        Ok(Self { data_file })
    }

    /// Create ExpensePaths pointing into a directory (useful for testing)
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            data_file: dir.as_ref().join(DEFAULT_FILE_NAME),
        }
    }

    /// Get the path to the expenses file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Get the sibling file written before being renamed over the data file
    pub fn temp_file(&self) -> PathBuf {
        temp_path_for(&self.data_file)
    }
}

/// Temporary sibling of `path` used for atomic replacement
pub(crate) fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

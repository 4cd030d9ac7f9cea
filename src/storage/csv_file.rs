//! CSV persistence for the expense store
//!
//! File layout:
//!
//! ```text
//! date,categories,amount,description
//! 2024-01-15,"Food, Travel",42.50,Lunch and cab
//! ```
//!
//! Files written before categories existed have no `categories` column;
//! those rows load with an empty category string. Saves go through a
//! temporary sibling file that is renamed over the destination.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::paths::temp_path_for;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Money};

use super::store::ExpenseStore;

/// Header row of the expenses file, in column order
pub const HEADER: [&str; 4] = ["date", "categories", "amount", "description"];

/// What a load found on disk
#[derive(Debug)]
pub enum LoadOutcome {
    /// No file existed; the store starts empty
    Missing,
    /// The file was read into a store
    Loaded(ExpenseStore),
}

impl LoadOutcome {
    pub fn into_store(self) -> ExpenseStore {
        match self {
            Self::Missing => ExpenseStore::new(),
            Self::Loaded(store) => store,
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    date: &'a str,
    categories: &'a str,
    amount: String,
    description: &'a str,
}

/// Column positions resolved from a header row
struct ColumnMapping {
    date: usize,
    categories: Option<usize>,
    amount: usize,
    description: usize,
}

impl ColumnMapping {
    fn from_headers(headers: &StringRecord) -> ExpenseResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| find(name).ok_or(ExpenseError::MissingColumn(name));

        Ok(Self {
            date: require("date")?,
            categories: find("categories"),
            amount: require("amount")?,
            description: require("description")?,
        })
    }
}

/// Load expenses from a CSV file
///
/// A missing file is not an error. A malformed amount anywhere in the file,
/// or a missing `date`, `amount` or `description` column, fails the whole load.
pub fn load_expenses(path: &Path) -> ExpenseResult<LoadOutcome> {
    if !path.exists() {
        info!(path = %path.display(), "no expenses file found");
        return Ok(LoadOutcome::Missing);
    }

    let file = File::open(path).map_err(|e| {
        ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let store = read_expenses(file)?;
    debug!(path = %path.display(), count = store.len(), "loaded expenses");
    Ok(LoadOutcome::Loaded(store))
}

/// Read expenses from any CSV source
pub fn read_expenses<R: Read>(source: R) -> ExpenseResult<ExpenseStore> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(ExpenseStore::new());
    }
    let mapping = ColumnMapping::from_headers(&headers)?;
    if mapping.categories.is_none() {
        debug!("expenses file has no categories column, using empty categories");
    }

    let mut store = ExpenseStore::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        store.push(parse_record(&record, idx + 1, &mapping)?);
    }

    Ok(store)
}

fn parse_record(
    record: &StringRecord,
    row: usize,
    mapping: &ColumnMapping,
) -> ExpenseResult<ExpenseRecord> {
    let field = |idx: usize| record.get(idx).map(str::to_string);

    let amount_str = record
        .get(mapping.amount)
        .ok_or_else(|| ExpenseError::invalid_amount(row, "Missing amount"))?;
    let amount =
        Money::parse(amount_str).map_err(|e| ExpenseError::invalid_amount(row, e.to_string()))?;

    let categories = match mapping.categories {
        Some(idx) => field(idx),
        None => Some(String::new()),
    };

    Ok(ExpenseRecord::from_stored(
        field(mapping.date),
        categories,
        amount,
        field(mapping.description),
    ))
}

/// Write expenses as CSV (header included) to any sink
pub fn write_expenses<W: Write>(store: &ExpenseStore, sink: W) -> ExpenseResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);

    writer.write_record(HEADER)?;
    for expense in store {
        writer.serialize(CsvRow {
            date: expense.date(),
            categories: expense.categories(),
            amount: expense.amount().to_string(),
            description: expense.description(),
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Save expenses to a CSV file atomically (write to temp, then rename)
///
/// The destination is replaced wholesale; nothing from a previous file is kept.
pub fn save_expenses(store: &ExpenseStore, path: &Path) -> ExpenseResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    if let Err(e) = write_expenses(store, &mut writer) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    debug!(path = %path.display(), count = store.len(), "saved expenses");
    Ok(())
}

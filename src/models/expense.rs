//! Expense record model
//!
//! An expense is one dated, categorized amount with a free-form description.
//! Records are never edited after creation.

use chrono::NaiveDate;
use std::fmt;

use super::category::Category;
use super::date::DATE_FORMAT;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    date: String,
    categories: String,
    amount: Money,
    description: String,
    complete: bool,
}

impl ExpenseRecord {
    /// Create a record from validated user input
    pub fn new(
        date: NaiveDate,
        categories: &[Category],
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            categories: Category::join(categories),
            amount,
            description: description.into(),
            complete: true,
        }
    }

    /// Rebuild a record from stored fields
    ///
    /// Fields that were absent from the stored row are passed as `None`; the
    /// record then carries an empty string for them and is marked incomplete.
    /// Stored dates and category strings are kept verbatim.
    pub fn from_stored(
        date: Option<String>,
        categories: Option<String>,
        amount: Money,
        description: Option<String>,
    ) -> Self {
        let complete = date.is_some() && categories.is_some() && description.is_some();
        Self {
            date: date.unwrap_or_default(),
            categories: categories.unwrap_or_default(),
            amount,
            description: description.unwrap_or_default(),
            complete,
        }
    }

    /// The expense date as `YYYY-MM-DD`
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The category labels joined into one string
    pub fn categories(&self) -> &str {
        &self.categories
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether all four fields were present when the record was created
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}, Categories: {}, Amount: {}, Description: {}",
            self.date, self.categories, self.amount, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            &[Category::Food, Category::Travel],
            Money::from_cents(4250),
            "Lunch and cab",
        );

        assert_eq!(record.date(), "2024-01-15");
        assert_eq!(record.categories(), "Food, Travel");
        assert_eq!(record.amount(), Money::from_cents(4250));
        assert_eq!(record.description(), "Lunch and cab");
        assert!(record.is_complete());
    }

    #[test]
    fn test_from_stored_complete() {
        let record = ExpenseRecord::from_stored(
            Some("2024-01-15".into()),
            Some(String::new()),
            Money::from_cents(100),
            Some(String::new()),
        );
        assert!(record.is_complete());
        assert_eq!(record.categories(), "");
    }

    #[test]
    fn test_from_stored_missing_field_is_incomplete() {
        let record = ExpenseRecord::from_stored(
            Some("2024-01-15".into()),
            Some("Food".into()),
            Money::from_cents(100),
            None,
        );
        assert!(!record.is_complete());
        assert_eq!(record.description(), "");
        assert_eq!(record.amount(), Money::from_cents(100));
    }

    #[test]
    fn test_display() {
        let record = ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            &[Category::Utilities],
            Money::from_cents(6000),
            "Electric bill",
        );
        assert_eq!(
            record.to_string(),
            "Date: 2024-03-01, Categories: Utilities, Amount: 60.00, Description: Electric bill"
        );
    }
}

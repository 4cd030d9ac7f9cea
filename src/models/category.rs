//! Expense categories
//!
//! The category set is fixed: six labels, selected by their 1-based position
//! in the list. A single expense may carry several categories, and the same
//! one more than once.

use std::fmt;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Travel,
    Entertainment,
    Utilities,
    Healthcare,
    Other,
}

/// Separator placed between labels when a selection is stored as one string
pub const CATEGORY_SEPARATOR: &str = ", ";

impl Category {
    /// Get all categories in selection order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Travel,
            Self::Entertainment,
            Self::Utilities,
            Self::Healthcare,
            Self::Other,
        ]
    }

    /// Get the display label for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
        }
    }

    /// Look up a category by its 1-based menu index
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }

    /// Join a selection into the single stored string ("Food, Travel")
    pub fn join(categories: &[Category]) -> String {
        categories
            .iter()
            .map(Category::name)
            .collect::<Vec<_>>()
            .join(CATEGORY_SEPARATOR)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse a comma-separated list of 1-based indices into categories
///
/// The whole input is rejected if any token is not an integer or lies
/// outside the category list. Every token is parsed before any is
/// range-checked, so a non-number is reported even when an out-of-range
/// index comes first. Order and repeats are preserved.
pub fn parse_selection(input: &str) -> Result<Vec<Category>, CategorySelectionError> {
    if input.trim().is_empty() {
        return Err(CategorySelectionError::Empty);
    }

    let indices = input
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|_| CategorySelectionError::NotANumber(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    indices
        .into_iter()
        .map(|index| {
            usize::try_from(index)
                .ok()
                .and_then(Category::from_index)
                .ok_or(CategorySelectionError::OutOfRange(index))
        })
        .collect()
}

/// Why a category selection was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelectionError {
    Empty,
    NotANumber(String),
    OutOfRange(i64),
}

impl fmt::Display for CategorySelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No categories selected"),
            Self::NotANumber(token) => write!(f, "'{}' is not a number", token),
            Self::OutOfRange(index) => write!(
                f,
                "{} is not between 1 and {}",
                index,
                Category::all().len()
            ),
        }
    }
}

impl std::error::Error for CategorySelectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_list() {
        let all = Category::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].name(), "Food");
        assert_eq!(all[5].name(), "Other");
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Category::from_index(1), Some(Category::Food));
        assert_eq!(Category::from_index(6), Some(Category::Other));
        assert_eq!(Category::from_index(0), None);
        assert_eq!(Category::from_index(7), None);
    }

    #[test]
    fn test_parse_selection_preserves_order() {
        let selected = parse_selection("1,3,5").unwrap();
        assert_eq!(
            selected,
            vec![Category::Food, Category::Entertainment, Category::Healthcare]
        );

        let selected = parse_selection(" 5 , 1").unwrap();
        assert_eq!(selected, vec![Category::Healthcare, Category::Food]);
    }

    #[test]
    fn test_parse_selection_allows_repeats() {
        let selected = parse_selection("2,2").unwrap();
        assert_eq!(selected, vec![Category::Travel, Category::Travel]);
    }

    #[test]
    fn test_parse_selection_rejects_bad_input() {
        assert_eq!(
            parse_selection("0,2"),
            Err(CategorySelectionError::OutOfRange(0))
        );
        assert_eq!(
            parse_selection("a,2"),
            Err(CategorySelectionError::NotANumber("a".into()))
        );
        assert_eq!(
            parse_selection("1,7"),
            Err(CategorySelectionError::OutOfRange(7))
        );
        assert_eq!(
            parse_selection("-1"),
            Err(CategorySelectionError::OutOfRange(-1))
        );
        assert_eq!(parse_selection(""), Err(CategorySelectionError::Empty));
        assert_eq!(parse_selection("  "), Err(CategorySelectionError::Empty));
        assert_eq!(
            parse_selection("1,,2"),
            Err(CategorySelectionError::NotANumber(String::new()))
        );
    }

    #[test]
    fn test_parse_selection_non_number_wins_over_range() {
        assert_eq!(
            parse_selection("7,a"),
            Err(CategorySelectionError::NotANumber("a".into()))
        );
        assert_eq!(
            parse_selection("0, 9, x"),
            Err(CategorySelectionError::NotANumber("x".into()))
        );
    }

    #[test]
    fn test_join() {
        assert_eq!(
            Category::join(&[Category::Food, Category::Travel]),
            "Food, Travel"
        );
        assert_eq!(Category::join(&[Category::Other]), "Other");
        assert_eq!(Category::join(&[]), "");
    }
}

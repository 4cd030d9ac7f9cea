//! Category display formatting

use crate::models::Category;

/// Format the numbered category list shown before selection
pub fn format_category_menu() -> String {
    let mut output =
        String::from("Select one or more categories from the list (separate choices by commas):\n");

    for (idx, category) in Category::all().iter().enumerate() {
        output.push_str(&format!("{}. {}\n", idx + 1, category));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_category_menu() {
        let menu = format_category_menu();
        let lines: Vec<_> = menu.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "1. Food");
        assert_eq!(lines[6], "6. Other");
    }
}

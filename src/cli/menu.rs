//! Main menu commands

use std::fmt;

/// Text of the main menu
pub const MENU: &str = "\nPersonal Expense Tracker\n\
                        1. Add Expense\n\
                        2. View Expenses\n\
                        3. Track Budget\n\
                        4. Save Expenses\n\
                        5. Exit\n";

/// Prompt shown under the menu
pub const MENU_PROMPT: &str = "Enter your choice (1-5): ";

/// One of the five menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    View,
    TrackBudget,
    Save,
    Exit,
}

impl MenuCommand {
    /// Parse a menu answer; anything other than 1-5 is `None`
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::TrackBudget),
            "4" => Some(Self::Save),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::View => "view",
            Self::TrackBudget => "track-budget",
            Self::Save => "save",
            Self::Exit => "exit",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(MenuCommand::parse("1"), Some(MenuCommand::Add));
        assert_eq!(MenuCommand::parse("2"), Some(MenuCommand::View));
        assert_eq!(MenuCommand::parse("3"), Some(MenuCommand::TrackBudget));
        assert_eq!(MenuCommand::parse("4"), Some(MenuCommand::Save));
        assert_eq!(MenuCommand::parse(" 5 "), Some(MenuCommand::Exit));
    }

    #[test]
    fn test_parse_rejects_other_input() {
        assert_eq!(MenuCommand::parse(""), None);
        assert_eq!(MenuCommand::parse("0"), None);
        assert_eq!(MenuCommand::parse("6"), None);
        assert_eq!(MenuCommand::parse("add"), None);
        assert_eq!(MenuCommand::parse("1 2"), None);
    }

    #[test]
    fn test_menu_lists_five_commands() {
        assert_eq!(MENU.lines().filter(|l| l.contains(". ")).count(), 5);
        assert!(MENU.contains("5. Exit"));
    }
}

//! Budget report formatting

use crate::services::{BudgetReport, BudgetStatus};

/// Format a budget comparison for terminal display
pub fn format_budget_report(report: &BudgetReport) -> String {
    let mut output = format!("Total spent so far: {}\n", report.total);

    match report.status {
        BudgetStatus::Exceeded => {
            output.push_str("Warning: You have exceeded your budget!\n");
        }
        BudgetStatus::Within { remaining } => {
            output.push_str(&format!("You have {} left for the month.\n", remaining));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_exceeded() {
        let report = BudgetReport {
            total: Money::from_cents(5500),
            budget: Money::from_cents(5000),
            status: BudgetStatus::Exceeded,
        };
        assert_eq!(
            format_budget_report(&report),
            "Total spent so far: 55.00\nWarning: You have exceeded your budget!\n"
        );
    }

    #[test]
    fn test_format_within() {
        let report = BudgetReport {
            total: Money::from_cents(5500),
            budget: Money::from_cents(10000),
            status: BudgetStatus::Within {
                remaining: Money::from_cents(4500),
            },
        };
        assert_eq!(
            format_budget_report(&report),
            "Total spent so far: 55.00\nYou have 45.00 left for the month.\n"
        );
    }
}

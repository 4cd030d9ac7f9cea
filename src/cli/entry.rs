//! Interactive entry of expenses and budgets
//!
//! Every field is re-prompted until it is valid; only a closed input stream
//! ends an entry early.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::display::format_category_menu;
use crate::error::ExpenseResult;
use crate::models::{parse_date, parse_selection, Category, CategorySelectionError, Money};
use crate::services::CreateExpenseInput;

use super::prompt::Prompter;

/// Prompt for a `YYYY-MM-DD` date until a real calendar date is given
pub fn read_date<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> ExpenseResult<NaiveDate> {
    let date = prompter.ask_until("Enter the date (YYYY-MM-DD): ", parse_date, |answer, _| {
        format!(
            "{} is not a valid date. Please enter a valid date in YYYY-MM-DD format.",
            answer
        )
    })?;
    prompter.say(format!("{} is a valid date.", date.format("%Y-%m-%d")))?;
    Ok(date)
}

/// Show the category list and prompt until a valid selection is given
pub fn read_categories<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<Vec<Category>> {
    prompter.show(&format_category_menu())?;
    prompter.ask_until(
        "Enter the numbers corresponding to the categories (e.g., 1,3,5): ",
        parse_selection,
        |_, err| match err {
            CategorySelectionError::OutOfRange(_) => format!(
                "Please enter valid numbers between 1 and {}.",
                Category::all().len()
            ),
            CategorySelectionError::NotANumber(_) | CategorySelectionError::Empty => {
                "Invalid input, please enter valid numbers separated by commas.".to_string()
            }
        },
    )
}

/// Prompt for an amount until it parses
pub fn read_amount<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> ExpenseResult<Money> {
    prompter.ask_until(prompt, Money::parse, |answer, _| {
        format!(
            "'{}' is not a valid amount. Please enter a number (e.g., 42.50).",
            answer.trim()
        )
    })
}

/// Walk through date, categories, amount and description
pub fn read_expense<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<CreateExpenseInput> {
    let date = read_date(prompter)?;
    let categories = read_categories(prompter)?;
    let amount = read_amount(prompter, "Enter the amount spent: ")?;
    let description = prompter.ask("Enter a brief description: ")?;

    Ok(CreateExpenseInput {
        date,
        categories,
        amount,
        description,
    })
}

/// Prompt for the monthly budget
pub fn read_budget<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> ExpenseResult<Money> {
    read_amount(prompter, "Enter your monthly budget: ")
}

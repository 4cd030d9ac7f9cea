//! Interactive session
//!
//! Owns the expense store and the budget for the lifetime of the program and
//! dispatches menu commands against them.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::{debug, info};

use crate::config::ExpensePaths;
use crate::display::{format_budget_report, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::services::{BudgetService, ExpenseService};
use crate::storage::{load_expenses, save_expenses, ExpenseStore, LoadOutcome};

use super::entry::{read_budget, read_expense};
use super::menu::{MenuCommand, MENU, MENU_PROMPT};
use super::prompt::Prompter;

/// State of one run of the tracker
#[derive(Debug)]
pub struct Session {
    paths: ExpensePaths,
    store: ExpenseStore,
    /// Set the first time the budget is tracked, then reused
    budget: Option<Money>,
}

impl Session {
    /// Start a session over an already-loaded store
    pub fn new(paths: ExpensePaths, store: ExpenseStore) -> Self {
        Self {
            paths,
            store,
            budget: None,
        }
    }

    /// Load the expenses file and start a session over it
    pub fn open<R: BufRead, W: Write>(
        paths: ExpensePaths,
        prompter: &mut Prompter<R, W>,
    ) -> ExpenseResult<Self> {
        let store = match load_expenses(paths.data_file())? {
            LoadOutcome::Missing => {
                prompter.say("No previous expenses found, starting fresh.")?;
                ExpenseStore::new()
            }
            LoadOutcome::Loaded(store) => {
                prompter.say("Expenses loaded successfully!")?;
                store
            }
        };

        Ok(Self::new(paths, store))
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn budget(&self) -> Option<Money> {
        self.budget
    }

    /// Show the menu and run commands until Exit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> ExpenseResult<()> {
        loop {
            prompter.show(MENU)?;
            let answer = match prompter.ask(MENU_PROMPT) {
                Ok(answer) => answer,
                Err(e) if e.is_input_closed() => {
                    info!("input closed at menu, exiting");
                    self.execute(MenuCommand::Exit, prompter)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let Some(command) = MenuCommand::parse(&answer) else {
                prompter.say("Invalid choice, please try again.")?;
                continue;
            };

            if self.execute(command, prompter)?.is_break() {
                return Ok(());
            }
        }
    }

    /// Run one menu command
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: MenuCommand,
        prompter: &mut Prompter<R, W>,
    ) -> ExpenseResult<ControlFlow<()>> {
        debug!(%command, "running menu command");

        match command {
            MenuCommand::Add => self.add_expense(prompter)?,
            MenuCommand::View => prompter.show(&format_expense_list(&self.store))?,
            MenuCommand::TrackBudget => self.track_budget(prompter)?,
            MenuCommand::Save => self.save(prompter)?,
            MenuCommand::Exit => {
                self.save(prompter)?;
                prompter.say("Goodbye!")?;
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn add_expense<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> ExpenseResult<()> {
        let input = read_expense(prompter)?;
        ExpenseService::new(&mut self.store).add(input);
        prompter.say("Expense added successfully!")
    }

    fn track_budget<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> ExpenseResult<()> {
        let budget = match self.budget {
            Some(budget) => budget,
            None => {
                let budget = read_budget(prompter)?;
                self.budget = Some(budget);
                budget
            }
        };

        match BudgetService::new(&self.store).track(budget) {
            Ok(report) => prompter.show(&format_budget_report(&report)),
            Err(ExpenseError::AmountOverflow(what)) => {
                debug!(what, "budget arithmetic overflowed");
                prompter.say("Total spending is too large to compute.")
            }
            Err(e) => Err(e),
        }
    }

    fn save<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> ExpenseResult<()> {
        save_expenses(&self.store, self.paths.data_file())?;
        prompter.say("Expenses saved successfully!")
    }
}

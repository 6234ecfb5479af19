//! Interactive menu session
//!
//! Drives the ledger from a numbered menu. The session borrows the ledger
//! it works on, so the caller decides where that ledger lives.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_expense_list, format_filter_result, format_summary};
use crate::error::LedgerResult;
use crate::ledger::{ExpenseFilter, Ledger};
use crate::models::Money;

use super::prompt::Prompter;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewAll,
    Filter,
    Summary,
    Exit,
}

impl MenuChoice {
    /// Map a menu number (1-5) to its entry
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::AddExpense),
            2 => Some(Self::ViewAll),
            3 => Some(Self::Filter),
            4 => Some(Self::Summary),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

const CANCEL: &str = "q";

/// A menu session over arbitrary input and output streams
pub struct Session<'a, R, W> {
    ledger: &'a mut Ledger,
    settings: &'a Settings,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            ledger,
            settings,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run the menu until the user exits or input runs out
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            self.display_menu()?;

            let Some(number) = self
                .prompter
                .ask_parsed("Enter your choice (1-5): ", str::parse::<i64>)?
            else {
                break;
            };

            let flow = match MenuChoice::from_number(number) {
                Some(MenuChoice::AddExpense) => self.add_expense()?,
                Some(MenuChoice::ViewAll) => self.view_all()?,
                Some(MenuChoice::Filter) => self.filter_expenses()?,
                Some(MenuChoice::Summary) => self.view_summary()?,
                Some(MenuChoice::Exit) => Flow::Quit,
                None => {
                    writeln!(
                        self.prompter.output(),
                        "Invalid choice. Please enter a number between 1 and 5."
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.prompter.output(), "Exiting Expense Tracker. Goodbye!")?;
        Ok(())
    }

    fn display_menu(&mut self) -> LedgerResult<()> {
        let out = self.prompter.output();
        writeln!(out, "\nExpense Tracker Menu:")?;
        writeln!(out, "1. Add New Expense")?;
        writeln!(out, "2. View All Expenses")?;
        writeln!(out, "3. Filter Expenses")?;
        writeln!(out, "4. View Summary")?;
        writeln!(out, "5. Exit")?;
        Ok(())
    }

    fn add_expense(&mut self) -> LedgerResult<Flow> {
        writeln!(self.prompter.output(), "\nAdd New Expense:")?;
        writeln!(self.prompter.output(), "(Enter 'q' at any time to cancel)")?;

        let Some(date) = self.prompter.ask_required("Enter date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Quit);
        };
        if date == CANCEL {
            return self.cancelled();
        }

        let Some(amount) = self.prompter.ask_parsed("Enter amount: ", Money::parse)? else {
            return Ok(Flow::Quit);
        };
        if !amount.is_positive() {
            writeln!(self.prompter.output(), "Amount must be positive. Try again.")?;
            return Ok(Flow::Continue);
        }

        let Some(category) = self.prompter.ask_required("Enter category: ")? else {
            return Ok(Flow::Quit);
        };
        if category == CANCEL {
            return self.cancelled();
        }

        let Some(description) = self.prompter.ask("Enter description (optional): ")? else {
            return Ok(Flow::Quit);
        };

        match self
            .ledger
            .add(&date, amount, &category, Some(&description))
        {
            Ok(_) => writeln!(self.prompter.output(), "Expense added successfully!")?,
            Err(err) => writeln!(self.prompter.output(), "{}", err)?,
        }

        Ok(Flow::Continue)
    }

    fn cancelled(&mut self) -> LedgerResult<Flow> {
        writeln!(self.prompter.output(), "Expense entry cancelled.")?;
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> LedgerResult<Flow> {
        let table = format_expense_list(self.ledger.get_all(), &self.settings.currency_symbol);
        write!(self.prompter.output(), "{}", table)?;
        Ok(Flow::Continue)
    }

    fn filter_expenses(&mut self) -> LedgerResult<Flow> {
        writeln!(self.prompter.output(), "\nFilter Expenses:")?;

        let mut answers = Vec::with_capacity(3);
        for prompt in [
            "Enter start date (YYYY-MM-DD, leave empty for no filter): ",
            "Enter end date (YYYY-MM-DD, leave empty for no filter): ",
            "Enter category to filter by (leave empty for no filter): ",
        ] {
            let Some(answer) = self.prompter.ask(prompt)? else {
                return Ok(Flow::Quit);
            };
            answers.push(answer);
        }

        let filter = ExpenseFilter::from_inputs(&answers[0], &answers[1], &answers[2]);
        let outcome = self.ledger.filter(&filter);
        let table = format_filter_result(&outcome, &self.settings.currency_symbol);
        write!(self.prompter.output(), "{}", table)?;

        Ok(Flow::Continue)
    }

    fn view_summary(&mut self) -> LedgerResult<Flow> {
        let summary = self.ledger.summarize();
        let table = format_summary(&summary, &self.settings.currency_symbol);
        write!(self.prompter.output(), "{}", table)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(ledger: &mut Ledger, input: impl AsRef<[u8]>) -> String {
        let settings = Settings::default();
        let mut output = Vec::new();
        Session::new(ledger, &settings, Cursor::new(input.as_ref()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::from_number(5), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(6), None);
    }

    #[test]
    fn test_add_then_exit() {
        let mut ledger = Ledger::new();
        let output = run(
            &mut ledger,
            "1\n2025-05-20\n45.90\nGroceries\nfruits and veggies\n5\n",
        );

        assert!(output.contains("Expense added successfully!"));
        assert!(output.ends_with("Exiting Expense Tracker. Goodbye!\n"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get_all()[0].amount(), Money::from_cents(4590));
        assert_eq!(ledger.get_all()[0].description(), "fruits and veggies");
    }

    #[test]
    fn test_add_reports_invalid_date() {
        let mut ledger = Ledger::new();
        let output = run(&mut ledger, "1\n2025-02-30\n10\nFood\n\n5\n");

        assert!(output.contains("Invalid date '2025-02-30'. Please use YYYY-MM-DD."));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let mut ledger = Ledger::new();
        let output = run(&mut ledger, "1\n2025-05-20\n-5\n5\n");

        assert!(output.contains("Amount must be positive. Try again."));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_survives_non_utf8_description() {
        let mut ledger = Ledger::new();
        let output = run(&mut ledger, b"1\n2025-05-20\n10\nFood\n\xff\xfe\n5\n");

        assert!(output.contains("Expense added successfully!"));
        assert!(output.ends_with("Exiting Expense Tracker. Goodbye!\n"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get_all()[0].description(), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_add_can_be_cancelled() {
        let mut ledger = Ledger::new();
        let output = run(&mut ledger, "1\nq\n1\n2025-05-20\n10\nq\n5\n");

        assert_eq!(output.matches("Expense entry cancelled.").count(), 2);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_menu_input() {
        let mut ledger = Ledger::new();
        let output = run(&mut ledger, "abc\n9\n5\n");

        assert!(output.contains("Invalid input. Please try again."));
        assert!(output.contains("Invalid choice. Please enter a number between 1 and 5."));
    }

    #[test]
    fn test_filter_reports_ignored_bound() {
        let mut ledger = Ledger::new();
        ledger
            .add("2025-05-20", Money::from_cents(4590), "Groceries", None)
            .unwrap();
        ledger
            .add("2025-05-21", Money::from_cents(1000), "Transportation", None)
            .unwrap();

        let output = run(&mut ledger, "3\nnot-a-date\n\ngroceries\n5\n");

        assert!(output.contains("Warning: Invalid start date format 'not-a-date'. Ignoring."));
        assert!(output.contains("$45.90"));
        assert!(!output.contains("$10.00"));
    }

    #[test]
    fn test_summary_uses_currency_symbol() {
        let mut ledger = Ledger::new();
        ledger
            .add("2025-05-20", Money::from_cents(4590), "Groceries", None)
            .unwrap();

        let settings = Settings {
            currency_symbol: "£".into(),
            ..Settings::default()
        };
        let mut output = Vec::new();
        Session::new(&mut ledger, &settings, Cursor::new("4\n5\n".as_bytes()), &mut output)
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("| TOTAL                |     £45.90 |"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut ledger = Ledger::new();
        let output = run(&mut ledger, "2\n");

        assert!(output.contains("All Expenses:"));
        assert!(output.ends_with("Exiting Expense Tracker. Goodbye!\n"));
    }
}

//! Expense table formatting

use crate::ledger::FilterOutcome;
use crate::models::Expense;

use super::rule;

const LIST_WIDTH: usize = 60;
// "| " + 10 + " | " + 20 + " | " + 12 + " | " + 31 + " |"
const FILTERED_WIDTH: usize = 86;

/// Format every expense as a simple column list
pub fn format_expense_list<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    currency: &str,
) -> String {
    let mut output = String::from("\nAll Expenses:\n");
    output.push_str(&format!(
        "{:<12} | {:<15} | {:>10} | Description\n",
        "Date", "Category", "Amount"
    ));
    output.push_str(&rule(LIST_WIDTH));

    let mut count = 0;
    for expense in expenses {
        output.push_str(&format!(
            "{:<12} | {:<15} | {:>10} | {}\n",
            expense.date().to_string(),
            expense.category(),
            expense.amount().format_with_symbol(currency),
            expense.description()
        ));
        count += 1;
    }

    if count == 0 {
        output.push_str("No expenses recorded.\n");
    }

    output
}

/// Format expenses as a bordered table
pub fn format_filtered_expenses<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    currency: &str,
) -> String {
    let mut output = String::from("\nFiltered Expenses:\n");
    output.push_str(&rule(FILTERED_WIDTH));
    output.push_str(&format!(
        "| {:<10} | {:<20} | {:>12} | {:<31} |\n",
        "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&rule(FILTERED_WIDTH));

    for expense in expenses {
        output.push_str(&format!(
            "| {:<10} | {:<20} | {:>12} | {:<31} |\n",
            expense.date().to_string(),
            expense.category(),
            expense.amount().format_with_symbol(currency),
            expense.description()
        ));
    }

    output.push_str(&rule(FILTERED_WIDTH));
    output
}

/// Format a filter result: dropped-bound warnings first, then the table
pub fn format_filter_result(outcome: &FilterOutcome<'_>, currency: &str) -> String {
    let mut output = String::new();

    for bound in &outcome.ignored {
        output.push_str(&format!("Warning: {}\n", bound));
    }

    output.push_str(&format_filtered_expenses(
        outcome.expenses.iter().copied(),
        currency,
    ));

    if outcome.is_empty() {
        output.push_str("No matching expenses.\n");
    }

    output
}

//! Display formatting for terminal output
//!
//! Renders expenses and summaries as fixed-width text tables. Amounts are
//! shown with the configured currency symbol and two decimals.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_list, format_filter_result, format_filtered_expenses};
pub use summary::format_summary;

/// Horizontal rule of the given width
fn rule(width: usize) -> String {
    let mut line = "-".repeat(width);
    line.push('\n');
    line
}

//! Summary table formatting

use crate::ledger::Summary;

use super::rule;

// "| " + 20 + " | " + 10 + " |"
const SUMMARY_WIDTH: usize = 37;

/// Format per-category totals followed by a TOTAL row
pub fn format_summary(summary: &Summary, currency: &str) -> String {
    let mut output = String::from("\nExpense Summary:\n");
    output.push_str(&rule(SUMMARY_WIDTH));
    output.push_str(&format!("| {:<20} | {:>10} |\n", "Category", "Amount"));
    output.push_str(&rule(SUMMARY_WIDTH));

    for (category, total) in summary.iter() {
        output.push_str(&format!(
            "| {:<20} | {:>10} |\n",
            category,
            total.format_with_symbol(currency)
        ));
    }

    output.push_str(&rule(SUMMARY_WIDTH));
    output.push_str(&format!(
        "| {:<20} | {:>10} |\n",
        "TOTAL",
        summary.total.format_with_symbol(currency)
    ));
    output.push_str(&rule(SUMMARY_WIDTH));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::models::Money;

    #[test]
    fn test_format_summary() {
        let mut ledger = Ledger::new();
        ledger
            .add("2025-05-20", Money::from_cents(4590), "Groceries", None)
            .unwrap();
        ledger
            .add("2025-05-21", Money::from_cents(1000), "Transportation", None)
            .unwrap();
        ledger
            .add("2025-05-22", Money::from_cents(2550), "Dining Out", None)
            .unwrap();

        let output = format_summary(&ledger.summarize(), "$");
        let rows: Vec<&str> = output.lines().filter(|l| l.starts_with('|')).collect();

        assert_eq!(
            rows,
            vec![
                "| Category             |     Amount |",
                "| Dining Out           |     $25.50 |",
                "| Groceries            |     $45.90 |",
                "| Transportation       |     $10.00 |",
                "| TOTAL                |     $81.40 |",
            ]
        );
    }

    #[test]
    fn test_format_empty_summary() {
        let output = format_summary(&Summary::default(), "$");
        assert!(output.contains("| TOTAL                |      $0.00 |"));
    }
}

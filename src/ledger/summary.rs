//! Per-category spending summary
//!
//! A summary is always computed fresh from the ledger; nothing is cached.
//! Categories are grouped by exact string, so "Food" and "food" are two
//! separate entries even though a filter on either matches both.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Totals by category plus a grand total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Sum of amounts per distinct category string
    pub categories: BTreeMap<String, Money>,
    /// Sum of every amount
    pub total: Money,
}

impl Summary {
    /// Aggregate a sequence of expenses in a single pass
    pub fn from_expenses<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Self {
        let mut summary = Self::default();

        for expense in expenses {
            *summary
                .categories
                .entry(expense.category().to_string())
                .or_insert_with(Money::zero) += expense.amount();
            summary.total += expense.amount();
        }

        summary
    }

    /// Total for one category, matched exactly
    pub fn category_total(&self, category: &str) -> Option<Money> {
        self.categories.get(category).copied()
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate categories in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.categories.iter().map(|(name, total)| (name.as_str(), *total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalendarDate;

    fn expense(category: &str, cents: i64) -> Expense {
        Expense::new(
            CalendarDate::parse("2025-05-20").unwrap(),
            Money::from_cents(cents),
            category,
            "",
        )
    }

    #[test]
    fn test_empty() {
        let summary = Summary::from_expenses(&Vec::<Expense>::new());
        assert!(summary.is_empty());
        assert_eq!(summary.total, Money::zero());
    }

    #[test]
    fn test_accumulates_per_category() {
        let expenses = vec![
            expense("Groceries", 4590),
            expense("Transportation", 1000),
            expense("Groceries", 1210),
        ];
        let summary = Summary::from_expenses(&expenses);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.category_total("Groceries"), Some(Money::from_cents(5800)));
        assert_eq!(summary.category_total("Transportation"), Some(Money::from_cents(1000)));
        assert_eq!(summary.total, Money::from_cents(6800));
    }

    #[test]
    fn test_grouping_is_case_sensitive() {
        let expenses = vec![expense("Food", 100), expense("food", 200)];
        let summary = Summary::from_expenses(&expenses);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.category_total("Food"), Some(Money::from_cents(100)));
        assert_eq!(summary.category_total("food"), Some(Money::from_cents(200)));
        assert_eq!(summary.category_total("FOOD"), None);
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let expenses = vec![expense("b", 1), expense("a", 2), expense("c", 3)];
        let summary = Summary::from_expenses(&expenses);
        let names: Vec<&str> = summary.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}

//! The in-memory expense ledger
//!
//! The ledger owns every expense recorded during a session, in the order
//! they were added. It only grows: there is no edit or delete, and every
//! query is a linear scan that leaves the ledger untouched.

pub mod filter;
pub mod summary;

use tracing::{debug, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CalendarDate, Expense, Money};

pub use filter::{BoundKind, ExpenseFilter, FilterOutcome, IgnoredBound};
pub use summary::Summary;

/// Append-only collection of expenses
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
    // Running sum of every amount. Never exceeds i64::MAX cents, so no
    // category subtotal or grand total can overflow during summarize.
    recorded_total: Money,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new expense
    ///
    /// Checks run in order (date, amount, category) and the first failure
    /// is returned. The ledger is unchanged unless every check passes.
    /// An amount that would push the ledger total past the largest
    /// representable sum is rejected as `AmountTooLarge`.
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::{Ledger, models::Money};
    ///
    /// let mut ledger = Ledger::new();
    /// ledger
    ///     .add("2025-05-20", Money::from_cents(4590), "Groceries", Some("fruits and veggies"))
    ///     .unwrap();
    /// assert_eq!(ledger.len(), 1);
    /// ```
    pub fn add(
        &mut self,
        date: &str,
        amount: Money,
        category: &str,
        description: Option<&str>,
    ) -> LedgerResult<&Expense> {
        let checked = Self::validate(date, amount, category, description).and_then(|expense| {
            let total = self
                .recorded_total
                .checked_add(expense.amount())
                .ok_or(LedgerError::AmountTooLarge(expense.amount()))?;
            Ok((expense, total))
        });

        let (expense, total) = match checked {
            Ok(checked) => checked,
            Err(err) => {
                info!(error = %err, "rejected expense");
                return Err(err);
            }
        };

        debug!(
            date = %expense.date(),
            amount = %expense.amount(),
            category = expense.category(),
            "recorded expense"
        );

        let index = self.expenses.len();
        self.expenses.push(expense);
        self.recorded_total = total;
        Ok(&self.expenses[index])
    }

    fn validate(
        date: &str,
        amount: Money,
        category: &str,
        description: Option<&str>,
    ) -> LedgerResult<Expense> {
        let date = CalendarDate::parse(date)?;

        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        if category.is_empty() {
            return Err(LedgerError::EmptyCategory);
        }

        Ok(Expense::new(
            date,
            amount,
            category,
            description.unwrap_or_default(),
        ))
    }

    /// Select expenses by date range and category
    ///
    /// Matches keep their insertion order. A start or end bound that does
    /// not parse is left out of the query and listed in
    /// [`FilterOutcome::ignored`].
    pub fn filter(&self, filter: &ExpenseFilter) -> FilterOutcome<'_> {
        let (criteria, ignored) = filter.resolve();

        for bound in &ignored {
            warn!(bound = %bound.kind, input = %bound.input, "ignoring unparseable filter bound");
        }

        let expenses = self
            .expenses
            .iter()
            .filter(|expense| criteria.matches(expense))
            .collect();

        FilterOutcome { expenses, ignored }
    }

    /// Total spending per category and overall
    pub fn summarize(&self) -> Summary {
        Summary::from_expenses(&self.expenses)
    }

    /// Every expense, in the order it was added
    pub fn get_all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

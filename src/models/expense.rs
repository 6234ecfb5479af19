//! Expense model
//!
//! An expense is one recorded transaction: when it happened, how much it
//! cost, which category it belongs to and an optional note.

use serde::Serialize;

use super::date::CalendarDate;
use super::money::Money;

/// A single validated expense record
///
/// Fields are private so a stored expense cannot be changed once the
/// ledger has accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    date: CalendarDate,
    amount: Money,
    category: String,
    description: String,
}

impl Expense {
    pub(crate) fn new(
        date: CalendarDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case-insensitive category match
    ///
    /// Strings of different length never match, whatever their case.
    pub fn category_matches(&self, query: &str) -> bool {
        self.category.eq_ignore_ascii_case(query)
    }
}

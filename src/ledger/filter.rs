//! Expense filtering
//!
//! Filters are built from raw user text. A date bound that does not parse is
//! dropped and reported back as an [`IgnoredBound`] instead of failing the
//! whole query.

use std::fmt;

use crate::models::{CalendarDate, Expense};

/// Options for filtering expenses
///
/// Every field is optional; `None` and the empty string both mean
/// "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Earliest date to include (inclusive), as typed by the user
    pub start: Option<String>,
    /// Latest date to include (inclusive), as typed by the user
    pub end: Option<String>,
    /// Category to match, ignoring ASCII case
    pub category: Option<String>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from three prompt answers, treating blanks as absent
    pub fn from_inputs(start: &str, end: &str, category: &str) -> Self {
        Self {
            start: non_empty(start),
            end: non_empty(end),
            category: non_empty(category),
        }
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Parse the bounds, collecting a diagnostic for each one that is dropped
    pub(crate) fn resolve(&self) -> (Criteria<'_>, Vec<IgnoredBound>) {
        let mut ignored = Vec::new();
        let start = resolve_bound(BoundKind::Start, self.start.as_deref(), &mut ignored);
        let end = resolve_bound(BoundKind::End, self.end.as_deref(), &mut ignored);
        let category = self.category.as_deref().filter(|c| !c.is_empty());

        (
            Criteria {
                start,
                end,
                category,
            },
            ignored,
        )
    }
}

fn non_empty(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

fn resolve_bound(
    kind: BoundKind,
    input: Option<&str>,
    ignored: &mut Vec<IgnoredBound>,
) -> Option<CalendarDate> {
    let input = input.filter(|s| !s.is_empty())?;
    match CalendarDate::parse(input) {
        Ok(date) => Some(date),
        Err(_) => {
            ignored.push(IgnoredBound {
                kind,
                input: input.to_string(),
            });
            None
        }
    }
}

/// Parsed form of an [`ExpenseFilter`]
#[derive(Debug, Clone, Copy)]
pub(crate) struct Criteria<'f> {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    category: Option<&'f str>,
}

impl Criteria<'_> {
    pub(crate) fn matches(&self, expense: &Expense) -> bool {
        if self.start.is_some_and(|start| expense.date() < start) {
            return false;
        }
        if self.end.is_some_and(|end| expense.date() > end) {
            return false;
        }
        self.category
            .map_or(true, |category| expense.category_matches(category))
    }
}

/// Which side of the date range a bound constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Start,
    End,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// A date bound that was supplied but could not be parsed
///
/// The filter still ran, just without this bound, so the result may be
/// wider than the user intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredBound {
    pub kind: BoundKind,
    pub input: String,
}

impl fmt::Display for IgnoredBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid {} date format '{}'. Ignoring.",
            self.kind, self.input
        )
    }
}

/// Result of running a filter over the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    /// Matching expenses in insertion order
    pub expenses: Vec<&'a Expense>,
    /// Bounds that were dropped because they did not parse
    pub ignored: Vec<IgnoredBound>,
}

impl FilterOutcome<'_> {
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Check if any bound was ignored
    pub fn has_warnings(&self) -> bool {
        !self.ignored.is_empty()
    }
}

//! Calendar dates for expenses
//!
//! `CalendarDate` is the only way a date enters the ledger. Construction
//! validates the text and rejects days that do not exist on the Gregorian
//! calendar, so every value is a real date for its whole lifetime.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};

/// Earliest year accepted by the parser
pub const MIN_YEAR: i32 = 1900;

/// A validated year/month/day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse a `YYYY-MM-DD` date
    ///
    /// Each component must be a run of digits and the separators must be
    /// `-`. The day is rolled forward from the first of the month and the
    /// result must land on the same year, month and day, which rejects
    /// inputs such as `2025-02-30`.
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::CalendarDate;
    /// let date = CalendarDate::parse("2025-05-20").unwrap();
    /// assert_eq!(date.to_string(), "2025-05-20");
    /// assert!(CalendarDate::parse("2025-02-30").is_err());
    /// ```
    pub fn parse(text: &str) -> LedgerResult<Self> {
        let invalid = || LedgerError::InvalidDate(text.to_string());

        let parts: Vec<&str> = text.trim().split('-').collect();
        let [year, month, day] = parts[..] else {
            return Err(invalid());
        };

        let year: i32 = parse_component(year).ok_or_else(invalid)?;
        let month: u32 = parse_component(month).ok_or_else(invalid)?;
        let day: u32 = parse_component(day).ok_or_else(invalid)?;

        normalize(year, month, day).map(Self).ok_or_else(invalid)
    }

    /// Build a date from numeric parts, applying the same checks as `parse`
    pub fn from_ymd(year: i32, month: u32, day: u32) -> LedgerResult<Self> {
        normalize(year, month, day)
            .map(Self)
            .ok_or_else(|| LedgerError::InvalidDate(format!("{}-{:02}-{:02}", year, month, day)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Calendar order: year, then month, then day
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// An optionally `+`-signed run of ASCII digits
fn parse_component<T: FromStr>(part: &str) -> Option<T> {
    let digits = part.strip_prefix('+').unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn normalize(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if year < MIN_YEAR || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let rolled = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day - 1)))?;

    if (rolled.year(), rolled.month(), rolled.day()) != (year, month, day) {
        return None;
    }
    Some(rolled)
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

//! Money type for expense amounts
//!
//! Amounts are held as a whole number of cents so that category totals
//! always add up to the grand total exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(4590); // $45.90
    /// assert_eq!(amount.to_string(), "$45.90");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole dollars, truncated toward zero
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse an amount typed by a user
    ///
    /// Accepts "45.90", "45.9", "45", "$45.90", "-5", ".75". Digits past the
    /// second decimal place round half away from zero.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = rest.split_once('.').unwrap_or((rest, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol other than `$`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let m = Money::from_cents(4590);
        assert_eq!(m.dollars(), 45);
        assert_eq!(m.cents_part(), 90);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(4590).to_string(), "$45.90");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-500).to_string(), "-$5.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(1000).format_with_symbol("€"), "€10.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("45.90").unwrap().cents(), 4590);
        assert_eq!(Money::parse("45.9").unwrap().cents(), 4590);
        assert_eq!(Money::parse("$10").unwrap().cents(), 1000);
        assert_eq!(Money::parse(" 25.50 ").unwrap().cents(), 2550);
        assert_eq!(Money::parse("-5").unwrap().cents(), -500);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("0").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(Money::parse("1.005").unwrap().cents(), 101);
        assert_eq!(Money::parse("1.004").unwrap().cents(), 100);
        assert_eq!(Money::parse("-1.999").unwrap().cents(), -200);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1e5").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_checked_add() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!(big.checked_add(Money::from_cents(1)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_cents(2)), None);
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(4590),
            Money::from_cents(1000),
            Money::from_cents(2550),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 8140);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}

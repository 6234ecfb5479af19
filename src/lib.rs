//! Expense Ledger - terminal-based personal expense tracking
//!
//! This library records dated expenses in memory and answers three kinds
//! of question about them: list everything, filter by date range and
//! category, and total spending per category.
//!
//! # Architecture
//!
//! - `models`: dates, amounts and the expense record
//! - `ledger`: the append-only ledger with filter and summary queries
//! - `display`: fixed-width text tables
//! - `cli`: interactive menu session and command handlers
//! - `config`: config directory and settings
//! - `logging`: tracing setup for the binary
//! - `error`: error types
//!
//! # Example
//!
//! ```
//! use expense_ledger::{ExpenseFilter, Ledger, models::Money};
//!
//! let mut ledger = Ledger::new();
//! ledger.add("2025-05-20", Money::from_cents(4590), "Groceries", None)?;
//! ledger.add("2025-05-21", Money::from_cents(1000), "Transportation", None)?;
//!
//! let outcome = ledger.filter(&ExpenseFilter::new().category("groceries"));
//! assert_eq!(outcome.len(), 1);
//! assert_eq!(ledger.summarize().total, Money::from_cents(5590));
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{ExpenseFilter, FilterOutcome, IgnoredBound, Ledger, Summary};

//! Core data models for the expense ledger
//!
//! Dates, amounts and the expense record built from them.

pub mod date;
pub mod expense;
pub mod money;

pub use date::CalendarDate;
pub use expense::Expense;
pub use money::{Money, MoneyParseError};

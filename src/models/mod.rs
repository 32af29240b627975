//! Core data models for the expense tracker
//!
//! The expense record and the value types it is built from.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, UnknownCategory};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};

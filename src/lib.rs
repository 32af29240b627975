//! Expense tracker - record, filter and summarize personal expenses
//!
//! This library provides the core of a single-user expense tracker: the
//! expense model, input validation, an in-memory store mirrored to a
//! pluggable persistence backend, filtering, and category/monthly reports.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense, category, money, ids)
//! - `validation`: Checks and normalizes input before it reaches the store
//! - `storage`: The expense store and its persistence adapters
//! - `filter`: Category and date-range filtering
//! - `reports`: Category breakdown, monthly trend and totals
//! - `display` / `cli`: Terminal presentation
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_tracker::filter::FilterSpec;
//! use expense_tracker::models::Category;
//! use expense_tracker::reports;
//! use expense_tracker::storage::{ExpenseStore, MemoryAdapter};
//! use expense_tracker::validation::ExpenseInput;
//!
//! let mut store = ExpenseStore::load(MemoryAdapter::new());
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! store.add(&ExpenseInput::new("Coffee", "4.50", Category::Food, date)).unwrap();
//!
//! let view = store.view(&FilterSpec::new());
//! assert_eq!(reports::total(&view).to_string(), "$4.50");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod models;
pub mod reports;
pub mod storage;
pub mod validation;

pub use error::{ExpenseError, ExpenseResult};

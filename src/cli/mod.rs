//! CLI command handlers
//!
//! Bridges clap argument parsing with the expense store and reports.

pub mod config;
pub mod expense;

pub use config::{handle_config_command, ConfigArgs};
pub use expense::{handle_expense_command, ExpenseCommands};

//! Validation of expense input
//!
//! Every add and update goes through [`validate`] before it touches the
//! store. Rules run in a fixed order and the first failure is reported:
//!
//! 1. the title, trimmed, must not be empty
//! 2. the amount must parse, be strictly greater than zero and no larger
//!    than [`MAX_AMOUNT`]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Category, Money};

/// Largest amount a single expense may carry, in currency units
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Raw expense fields as entered by the user
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    pub title: String,
    /// Amount as typed, e.g. "4.50"
    pub amount: String,
    pub category: Category,
    pub date: NaiveDate,
    pub notes: String,
}

impl ExpenseInput {
    /// Create input with empty notes
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            category,
            date,
            notes: String::new(),
        }
    }

    /// Set the notes
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Validated and normalized expense fields
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    pub notes: String,
}

/// Reasons input is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title")]
    EmptyTitle,

    #[error("Amount must be positive: '{0}'")]
    InvalidAmount(String),
}

/// Check an input and normalize it into a draft
pub fn validate(input: &ExpenseInput) -> Result<ExpenseDraft, ValidationError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let amount = Money::parse(&input.amount)
        .ok()
        .filter(|amount| amount.is_positive() && amount.value() <= MAX_AMOUNT)
        .ok_or_else(|| ValidationError::InvalidAmount(input.amount.clone()))?;

    Ok(ExpenseDraft {
        title: title.to_string(),
        amount,
        category: input.category,
        date: input.date,
        notes: input.notes.clone(),
    })
}

//! Filtering of expense lists
//!
//! [`apply`] is a pure function: it never touches its input and can be
//! called repeatedly with different specs over the same records.

use chrono::NaiveDate;

use crate::models::{Category, Expense};

/// Optional constraints narrowing which expenses are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    /// Exact category match
    pub category: Option<Category>,
    /// Inclusive lower date bound
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub date_to: Option<NaiveDate>,
}

impl FilterSpec {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Only expenses on or after `date`
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Only expenses on or before `date`
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Whether no constraint is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.date_from.is_none() && self.date_to.is_none()
    }

    /// Whether `expense` satisfies every constraint that is set
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category.map_or(true, |c| expense.category == c)
            && self.date_from.map_or(true, |from| expense.date >= from)
            && self.date_to.map_or(true, |to| expense.date <= to)
    }
}

/// Keep the expenses matching `spec`, most recent first
///
/// Expenses on the same date keep their relative input order.
pub fn apply(records: &[Expense], spec: &FilterSpec) -> Vec<Expense> {
    let mut view: Vec<Expense> = records.iter().filter(|e| spec.matches(e)).cloned().collect();
    view.sort_by(|a, b| b.date.cmp(&a.date));
    view
}

//! Expense model
//!
//! A single logged monetary expense.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use crate::validation::ExpenseDraft;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, fixed at creation
    pub id: ExpenseId,

    /// Trimmed, non-empty title
    pub title: String,

    /// Amount spent, always positive for stored records
    pub amount: Money,

    pub category: Category,

    /// Day the expense happened
    pub date: NaiveDate,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// When the expense was created
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh id from validated fields
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            title: draft.title,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field, keeping id and creation time
    pub fn apply_draft(&mut self, draft: ExpenseDraft) {
        self.title = draft.title;
        self.amount = draft.amount;
        self.category = draft.category;
        self.date = draft.date;
        self.notes = draft.notes;
        self.updated_at = Utc::now();
    }

    /// Calendar month as (year, month)
    pub fn month(&self) -> (i32, u32) {
        (self.date.year(), self.date.month())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, cents: i64) -> ExpenseDraft {
        ExpenseDraft {
            title: title.to_string(),
            amount: Money::from_cents(cents),
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_from_draft_assigns_id() {
        let a = Expense::from_draft(draft("Coffee", 450));
        let b = Expense::from_draft(draft("Coffee", 450));
        assert_ne!(a.id, b.id);
        assert_eq!(a.amount, Money::from_cents(450));
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn test_apply_draft_keeps_identity() {
        let mut expense = Expense::from_draft(draft("Coffee", 450));
        let id = expense.id;
        let created = expense.created_at;

        expense.apply_draft(draft("Tea", 300));

        assert_eq!(expense.id, id);
        assert_eq!(expense.created_at, created);
        assert_eq!(expense.title, "Tea");
        assert_eq!(expense.amount, Money::from_cents(300));
    }

    #[test]
    fn test_month() {
        let expense = Expense::from_draft(draft("Coffee", 450));
        assert_eq!(expense.month(), (2024, 3));
    }

    #[test]
    fn test_serialized_shape() {
        let expense = Expense::from_draft(draft("Coffee", 450));
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["title"], "Coffee");
        assert_eq!(value["amount"], "4.50");
        assert_eq!(value["category"], "Food");
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["notes"], "");
    }

    #[test]
    fn test_notes_default_when_missing() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "title": "Bus",
            "amount": "2.00",
            "category": "Transportation",
            "date": "2024-03-02",
            "created_at": "2024-03-02T08:00:00Z",
            "updated_at": "2024-03-02T08:00:00Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.notes, "");
        assert_eq!(expense.category, Category::Transportation);
    }
}

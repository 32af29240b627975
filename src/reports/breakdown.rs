//! Spending by category

use crate::models::{Category, Expense, Money};

/// Total spent in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Chart color of the category
    pub color: &'static str,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Per-category totals over one set of expenses
///
/// Only categories present in the input appear, in order of first
/// appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    pub entries: Vec<CategoryTotal>,
}

impl CategoryBreakdown {
    /// Total for `category`, if it appeared in the input
    pub fn get(&self, category: Category) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.total)
    }

    /// Sum over all categories
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.total).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.entries.iter()
    }
}

/// Sum amounts per category
pub fn category_breakdown(records: &[Expense]) -> CategoryBreakdown {
    let mut entries: Vec<CategoryTotal> = Vec::new();

    for expense in records {
        match entries.iter_mut().find(|e| e.category == expense.category) {
            Some(entry) => {
                entry.total += expense.amount;
                entry.count += 1;
            }
            None => entries.push(CategoryTotal {
                category: expense.category,
                total: expense.amount,
                count: 1,
                color: expense.category.color(),
                percentage: 0.0,
            }),
        }
    }

    let grand_total = super::total(records);
    for entry in &mut entries {
        entry.percentage = entry.total.percent_of(grand_total);
    }

    CategoryBreakdown { entries }
}

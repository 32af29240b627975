//! Reports over filtered expense lists
//!
//! Every function here is pure. Callers pass the same filtered slice to all
//! of them so the numbers on one screen agree with each other.

pub mod breakdown;
pub mod summary;
pub mod trend;

pub use breakdown::{category_breakdown, CategoryBreakdown, CategoryTotal};
pub use summary::SummaryReport;
pub use trend::{monthly_trend, MonthTotal, TREND_MONTHS};

use crate::models::{Expense, Money};

/// Sum of all amounts
pub fn total(records: &[Expense]) -> Money {
    records.iter().map(|e| e.amount).sum()
}

/// Number of expenses
pub fn count(records: &[Expense]) -> usize {
    records.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{self, FilterSpec};
    use crate::models::Category;
    use crate::validation::{validate, ExpenseInput};

    /// Build a validated expense; `day` is "YYYY-MM-DD"
    pub fn expense(title: &str, amount: &str, category: Category, day: &str) -> Expense {
        let date = day.parse().unwrap();
        Expense::from_draft(validate(&ExpenseInput::new(title, amount, category, date)).unwrap())
    }

    #[test]
    fn test_total_and_count() {
        let records = vec![
            expense("Coffee", "4.50", Category::Food, "2024-03-01"),
            expense("Bus", "2.00", Category::Transportation, "2024-03-02"),
        ];

        assert_eq!(total(&records), Money::from_cents(650));
        assert_eq!(count(&records), 2);
        assert!(total(&[]).is_zero());
    }

    #[test]
    fn test_coffee_and_bus_scenario() {
        let records = vec![
            expense("Coffee", "4.50", Category::Food, "2024-03-01"),
            expense("Bus", "2.00", Category::Transportation, "2024-03-02"),
        ];

        let breakdown = category_breakdown(&records);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown.get(Category::Food), Some(Money::from_cents(450)));
        assert_eq!(breakdown.get(Category::Transportation), Some(Money::from_cents(200)));

        let food = filter::apply(&records, &FilterSpec::new().category(Category::Food));
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].title, "Coffee");
        assert_eq!(total(&food), Money::from_cents(450));
    }
}

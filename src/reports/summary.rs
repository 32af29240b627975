//! Summary report
//!
//! Bundles every aggregate shown on the summary screen so that all of them
//! are computed from the same filtered input.

use std::fmt::Write as _;

use super::breakdown::{category_breakdown, CategoryBreakdown};
use super::trend::{monthly_trend, MonthTotal};
use crate::models::{Expense, Money};

/// Totals, category breakdown and monthly trend over one set of expenses
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub total: Money,
    pub count: usize,
    pub breakdown: CategoryBreakdown,
    pub trend: Vec<MonthTotal>,
}

impl SummaryReport {
    /// Generate a summary of `records`
    pub fn generate(records: &[Expense]) -> Self {
        Self {
            total: super::total(records),
            count: super::count(records),
            breakdown: category_breakdown(records),
            trend: monthly_trend(records),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "Expense Summary");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        let _ = writeln!(
            output,
            "Total Expenses: {}",
            self.total.format_with_symbol(currency_symbol)
        );
        let _ = writeln!(output, "Transactions:   {}", self.count);
        let _ = writeln!(output, "Categories:     {}", self.breakdown.len());

        if self.breakdown.is_empty() {
            output.push_str("\nNo expenses found.\n");
            return output;
        }

        let _ = writeln!(output, "\n{:<20} {:>12} {:>6} {:>7}", "Category", "Amount", "Count", "%");
        output.push_str(&"-".repeat(50));
        output.push('\n');
        let mut rows: Vec<_> = self.breakdown.iter().collect();
        rows.sort_by(|a, b| b.total.cmp(&a.total));
        for entry in rows {
            let _ = writeln!(
                output,
                "{:<20} {:>12} {:>6} {:>6.1}%",
                entry.category.label(),
                entry.total.format_with_symbol(currency_symbol),
                entry.count,
                entry.percentage
            );
        }

        let _ = writeln!(output, "\n{:<20} {:>12}", "Month", "Amount");
        output.push_str(&"-".repeat(50));
        output.push('\n');
        for month in &self.trend {
            let _ = writeln!(
                output,
                "{:<20} {:>12}",
                month.month,
                month.total.format_with_symbol(currency_symbol)
            );
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::reports::tests::expense;

    #[test]
    fn test_generate_is_consistent() {
        let records = vec![
            expense("Coffee", "4.50", Category::Food, "2024-03-01"),
            expense("Bus", "2.00", Category::Transportation, "2024-03-02"),
        ];

        let report = SummaryReport::generate(&records);

        assert_eq!(report.total, Money::from_cents(650));
        assert_eq!(report.count, 2);
        assert_eq!(report.breakdown.total(), report.total);
        assert_eq!(report.trend.len(), 1);
        assert_eq!(report.trend[0].total, report.total);
    }

    #[test]
    fn test_format_terminal() {
        let records = vec![expense("Coffee", "4.50", Category::Food, "2024-03-01")];
        let text = SummaryReport::generate(&records).format_terminal("$");

        assert!(text.contains("Total Expenses: $4.50"));
        assert!(text.contains("Transactions:   1"));
        assert!(text.contains("Food"));
        assert!(text.contains("100.0%"));
        assert!(text.contains("2024-03"));
    }

    #[test]
    fn test_format_terminal_lists_largest_category_first() {
        let records = vec![
            expense("Coffee", "4.50", Category::Food, "2024-03-03"),
            expense("Rent", "800", Category::Utilities, "2024-03-02"),
            expense("Bus", "2.00", Category::Transportation, "2024-03-01"),
        ];
        let report = SummaryReport::generate(&records);
        assert_eq!(report.breakdown.iter().next().unwrap().category, Category::Food);

        let text = report.format_terminal("$");
        let utilities = text.find("Utilities").unwrap();
        let food = text.find("Food").unwrap();
        let transportation = text.find("Transportation").unwrap();
        assert!(utilities < food);
        assert!(food < transportation);
    }

    #[test]
    fn test_format_terminal_empty() {
        let text = SummaryReport::generate(&[]).format_terminal("$");
        assert!(text.contains("Total Expenses: $0.00"));
        assert!(text.contains("No expenses found."));
    }
}

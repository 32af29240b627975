//! Monthly spending trend

use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Number of most recent months kept in the trend
pub const TREND_MONTHS: usize = 6;

/// Total spent in one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    /// Month as "YYYY-MM"
    pub month: String,
    pub total: Money,
}

/// Per-month totals, oldest first, limited to the last [`TREND_MONTHS`]
/// months that have any expenses
///
/// Months without expenses are not filled in.
pub fn monthly_trend(records: &[Expense]) -> Vec<MonthTotal> {
    let mut months: BTreeMap<(i32, u32), Money> = BTreeMap::new();
    for expense in records {
        *months.entry(expense.month()).or_default() += expense.amount;
    }

    let skip = months.len().saturating_sub(TREND_MONTHS);
    months
        .into_iter()
        .skip(skip)
        .map(|((year, month), total)| MonthTotal {
            month: format!("{:04}-{:02}", year, month),
            total,
        })
        .collect()
}

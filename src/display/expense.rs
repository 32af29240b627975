//! Expense display formatting
//!
//! Plain-text list and detail views used by the CLI.

use crate::models::{Category, Expense};

/// Format one expense as a list row
pub fn format_expense_row(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{:12} {:10} {:24} {:15} {:>12}",
        expense.id.short(),
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.title, 24),
        expense.category.label(),
        expense.amount.format_with_symbol(currency_symbol)
    )
}

/// Format a list of expenses with a header
pub fn format_expense_list(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:24} {:15} {:>12}\n",
        "ID", "Date", "Title", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(77));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency_symbol));
        output.push('\n');
    }

    output
}

/// Format every field of one expense
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Title:    {}\n", expense.title));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Date:     {}\n", expense.date.format("%Y-%m-%d")));
    if !expense.notes.is_empty() {
        output.push_str(&format!("Notes:    {}\n", expense.notes));
    }
    output.push_str(&format!(
        "Created:  {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!(
        "Updated:  {}\n",
        expense.updated_at.format("%Y-%m-%d %H:%M")
    ));

    output
}

/// Format the fixed category list with chart colors
pub fn format_category_list() -> String {
    let mut output = String::from("Categories:\n");
    for category in Category::ALL {
        output.push_str(&format!("  {:15} {}\n", category.label(), category.color()));
    }
    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

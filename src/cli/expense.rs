//! Expense CLI commands
//!
//! Add, edit, delete, list and summarize expenses.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_list, format_expense_details, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::filter::FilterSpec;
use crate::models::{Category, Expense};
use crate::reports::SummaryReport;
use crate::storage::{ExpenseStore, PersistenceAdapter, Persisted};
use crate::validation::ExpenseInput;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount, e.g. "4.50"
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Edit an existing expense
    Edit {
        /// Expense ID
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },
    /// List expenses, most recent first
    #[command(alias = "ls")]
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// Show totals by category and by month
    Summary {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
    },
    /// List the available categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command<A: PersistenceAdapter>(
    store: &mut ExpenseStore<A>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
            date,
            notes,
        } => {
            let category = match category {
                Some(name) => parse_category(&name)?,
                None => settings.default_category,
            };
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => chrono::Local::now().date_naive(),
            };
            let input =
                ExpenseInput::new(title, amount, category, date).notes(notes.unwrap_or_default());

            let expense = report_warning(store.add(&input)?);
            println!("Expense added successfully!");
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::Edit {
            id,
            title,
            amount,
            category,
            date,
            notes,
        } => {
            let existing = store.find(&id)?.clone();
            let input = ExpenseInput {
                title: title.unwrap_or_else(|| existing.title.clone()),
                amount: amount.unwrap_or_else(|| existing.amount.format_with_symbol("")),
                category: category
                    .map(|name| parse_category(&name))
                    .transpose()?
                    .unwrap_or(existing.category),
                date: date
                    .map(|s| parse_date(&s))
                    .transpose()?
                    .unwrap_or(existing.date),
                notes: notes.unwrap_or_else(|| existing.notes.clone()),
            };

            let expense = report_warning(store.update(existing.id, &input)?);
            println!("Expense updated successfully!");
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let target = store.find(&id)?.id;
            match report_warning(store.remove(target)) {
                Some(removed) => println!("Expense deleted successfully: {}", removed),
                None => return Err(ExpenseError::expense_not_found(id)),
            }
        }

        ExpenseCommands::List {
            category,
            from,
            to,
            limit,
        } => {
            let spec = build_filter(category, from, to)?;
            let mut expenses = store.view(&spec);
            let matched = expenses.len();
            expenses.truncate(limit.unwrap_or(settings.list_limit));

            print!("{}", format_expense_list(&expenses, symbol));
            println!("\nShowing {} of {} expenses", expenses.len(), matched);
        }

        ExpenseCommands::Show { id } => {
            let expense = store.find(&id)?;
            print!("{}", format_expense_details(expense, symbol));
        }

        ExpenseCommands::Summary { category, from, to } => {
            let spec = build_filter(category, from, to)?;
            let expenses: Vec<Expense> = store.view(&spec);
            print!("{}", SummaryReport::generate(&expenses).format_terminal(symbol));
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_list());
        }
    }

    Ok(())
}

/// Print a persistence warning, if any, and keep the value
fn report_warning<T>(result: Persisted<T>) -> T {
    if let Some(warning) = &result.warning {
        eprintln!("Warning: {}", warning);
    }
    result.into_inner()
}

fn build_filter(
    category: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> ExpenseResult<FilterSpec> {
    Ok(FilterSpec {
        category: category.map(|name| parse_category(&name)).transpose()?,
        date_from: from.map(|s| parse_date(&s)).transpose()?,
        date_to: to.map(|s| parse_date(&s)).transpose()?,
    })
}

pub(crate) fn parse_category(name: &str) -> ExpenseResult<Category> {
    name.parse::<Category>()
        .map_err(|e| ExpenseError::Validation(e.to_string()))
}

fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

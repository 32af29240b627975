//! Config CLI command
//!
//! Shows the resolved paths and settings, and updates settings in place.

use clap::Args;

use super::expense::parse_category;
use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};

/// Options for `expenses config`; with none given the command only prints
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Set the currency symbol used when printing amounts
    #[arg(long)]
    pub currency: Option<String>,
    /// Set the category used when `add` is given none
    #[arg(long)]
    pub default_category: Option<String>,
    /// Set how many expenses `list` shows by default
    #[arg(long)]
    pub list_limit: Option<usize>,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.currency.is_none() && self.default_category.is_none() && self.list_limit.is_none()
    }
}

/// Handle `expenses config`
pub fn handle_config_command(
    paths: &ExpensePaths,
    settings: &mut Settings,
    args: ConfigArgs,
) -> ExpenseResult<()> {
    if !args.is_empty() {
        apply_changes(settings, args)?;
        settings.save(paths)?;
        println!("Settings saved.");
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Default category: {}", settings.default_category);
    println!("  List limit:       {}", settings.list_limit);

    Ok(())
}

fn apply_changes(settings: &mut Settings, args: ConfigArgs) -> ExpenseResult<()> {
    if let Some(currency) = args.currency {
        settings.currency_symbol = currency;
    }
    if let Some(name) = args.default_category {
        settings.default_category = parse_category(&name)?;
    }
    if let Some(limit) = args.list_limit {
        if limit == 0 {
            return Err(ExpenseError::Validation("List limit must be at least 1".into()));
        }
        settings.list_limit = limit;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> ExpensePaths {
        ExpensePaths::with_base_dir(dir.path().to_path_buf())
    }

    #[test]
    fn test_show_only_does_not_write() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        let mut settings = Settings::default();

        handle_config_command(&paths, &mut settings, ConfigArgs::default()).unwrap();

        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_changes_are_saved() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        let mut settings = Settings::default();

        let args = ConfigArgs {
            currency: Some("€".into()),
            default_category: Some("shopping".into()),
            list_limit: Some(10),
        };
        handle_config_command(&paths, &mut settings, args).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.default_category, Category::Shopping);
        assert_eq!(loaded.list_limit, 10);
    }

    #[test]
    fn test_invalid_change_saves_nothing() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        let mut settings = Settings::default();

        let args = ConfigArgs {
            default_category: Some("snacks".into()),
            ..Default::default()
        };
        let err = handle_config_command(&paths, &mut settings, args).unwrap_err();

        assert!(err.is_validation());
        assert!(!paths.settings_file().exists());
    }
}

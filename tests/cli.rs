//! End-to-end tests driving the `expenses` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path());
    cmd.env_remove("EXPENSES_LOG");
    cmd
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "Coffee", "4.50", "-c", "food", "-d", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));

    expenses(&dir)
        .args(["add", "Bus", "2.00", "-c", "Transportation", "-d", "2024-03-02"])
        .assert()
        .success();

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Bus"))
        .stdout(predicate::str::contains("Showing 2 of 2 expenses"));

    expenses(&dir)
        .args(["list", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Bus").not());

    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn summary_totals_by_category() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "Coffee", "4.50", "-c", "food", "-d", "2024-03-01"])
        .assert()
        .success();
    expenses(&dir)
        .args(["add", "Bus", "2.00", "-c", "transportation", "-d", "2024-03-02"])
        .assert()
        .success();

    expenses(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: $6.50"))
        .stdout(predicate::str::contains("Transactions:   2"))
        .stdout(predicate::str::contains("2024-03"));
}

#[test]
fn rejects_invalid_input() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "   ", "4.50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a title"));

    expenses(&dir)
        .args(["add", "Coffee", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be positive"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn delete_unknown_expense_fails() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["delete", "exp-deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}

#[test]
fn corrupt_data_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data").join("expenses.json"), "not json").unwrap();

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn config_changes_persist_across_runs() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["config", "--currency", "€", "--default-category", "shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    expenses(&dir)
        .args(["add", "Shoes", "60", "-d", "2024-03-01"])
        .assert()
        .success();

    expenses(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: €60.00"))
        .stdout(predicate::str::contains("Shopping"));
}

#[test]
fn sub_cent_amount_is_kept() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "Fuel", "4.995", "-c", "transportation", "-d", "2024-03-01"])
        .assert()
        .success();

    expenses(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: $4.995"));
}

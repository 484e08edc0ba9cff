use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "expense";
const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env(DATA_DIR_ENV, dir.path());
    cmd
}

fn add(dir: &TempDir, args: &[&str]) {
    expense(dir).arg("add").args(args).assert().success();
}

#[test]
fn add_then_list_shows_transaction() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args([
            "add", "Weekly groceries", "42.50", "--type", "expense", "--category", "Food & Dining",
            "--date", "2024-03-10",
        ])
        .assert()
        .success()
        .stdout(contains("Transaction added successfully!"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Weekly groceries").and(contains("-$42.50")));

    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn non_positive_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Refund", "-5", "--type", "income", "--category", "Salary"])
        .assert()
        .failure()
        .stderr(contains("Amount must be greater than 0"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No transactions found."));
}

#[test]
fn unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Mystery", "10", "--type", "expense", "--category", "Nope"])
        .assert()
        .failure()
        .stderr(contains("Unknown category"));
}

#[test]
fn duplicate_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["category", "add", "Pets"])
        .assert()
        .success()
        .stdout(contains("Category added successfully!"));

    expense(&dir)
        .args(["category", "add", "Pets"])
        .assert()
        .failure()
        .stderr(contains("Category already exists"));

    expense(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Pets"));
}

#[test]
fn budget_set_and_show() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["budget", "set", "500"])
        .assert()
        .success()
        .stdout(contains("$500.00"));

    expense(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(contains("Monthly budget"));

    expense(&dir)
        .args(["budget", "set", "abc"])
        .assert()
        .failure()
        .stderr(contains("Please enter a valid budget amount"));
}

#[test]
fn summary_totals_income_and_expenses() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Paycheck", "1000", "-t", "income", "-c", "Salary"]);
    add(&dir, &["Rent", "400", "-t", "expense", "-c", "Bills & Utilities"]);

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            contains("$1000.00")
                .and(contains("$400.00"))
                .and(contains("$600.00")),
        );
}

#[test]
fn export_writes_file() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Paycheck", "1000", "-t", "income", "-c", "Salary"]);
    let output = dir.path().join("out.json");

    expense(&dir)
        .arg("export")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Data exported successfully!"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("\"monthlyBudget\""));
    assert!(contents.contains("Paycheck"));
}

#[test]
fn reset_with_yes_clears_data() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Paycheck", "1000", "-t", "income", "-c", "Salary"]);

    expense(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("All data cleared successfully!"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No transactions found."));
}

#[test]
fn reset_declined_keeps_data() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Paycheck", "1000", "-t", "income", "-c", "Salary"]);

    expense(&dir)
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Cancelled"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Paycheck"));
}

#[test]
fn history_lists_audit_entries() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Paycheck", "1000", "-t", "income", "-c", "Salary"]);

    expense(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("CREATE").or(contains("Create")).or(contains("create")));
}

#[test]
fn timestamp_id_records_survive_an_add() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(
        data.join("transactions.json"),
        r#"[{"id":"1709251200000","description":"Old rent","amount":950,"type":"expense",
            "category":"Bills & Utilities","date":"2024-03-01","timestamp":"2024-03-01T00:00:00Z"}]"#,
    )
    .unwrap();

    add(&dir, &["Tea", "3", "--type", "expense", "--category", "Food & Dining"]);

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Old rent").and(contains("Tea")));

    let stored = std::fs::read_to_string(data.join("transactions.json")).unwrap();
    assert!(stored.contains("\"1709251200000\""));
}

#[test]
fn unwritable_audit_log_only_warns() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("audit.log")).unwrap();

    expense(&dir)
        .args(["add", "Coffee", "4.50", "--type", "expense", "--category", "Food & Dining"])
        .assert()
        .success()
        .stdout(contains("Transaction added successfully!"))
        .stderr(contains("Warning: audit log not updated"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Coffee"));
}

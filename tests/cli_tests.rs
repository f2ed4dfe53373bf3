use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn data_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir_all(&data).unwrap();

    fs::write(
        data.join("expenses.json"),
        r#"[
            {"id": 1, "vendor": "Market", "amount": 10, "category_id": 1, "date": "2024-01-05"},
            {"id": 2, "vendor": "Bistro", "amount": "20.00", "category_id": 1, "date": "2024-01-10"},
            {"id": 3, "vendor": "Market", "amount": 5, "category_id": null, "date": "2024-02-01"},
            {"id": 4, "vendor": "Broken", "date": "2024-01-02"}
        ]"#,
    )
    .unwrap();
    fs::write(
        data.join("categories.json"),
        r##"[{"id": 1, "name": "Food", "color": "#ff0000", "icon": null}]"##,
    )
    .unwrap();
    fs::write(
        data.join("budgets.json"),
        r#"[{"id": 1, "amount": 100, "month": "2024-01", "category_id": 1}]"#,
    )
    .unwrap();
    tmp
}

fn spendlens(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlens").unwrap();
    cmd.arg("--data-dir").arg(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn report_prints_totals_and_breakdown() {
    let dir = data_dir();
    spendlens(&dir)
        .args(["report", "--as-of", "2024-02-15"])
        .assert()
        .success()
        .stdout(contains("Total Spent:    $35.00"))
        .stdout(contains("Food"))
        .stdout(contains("Uncategorized"))
        .stdout(contains("Skipped:        1 malformed record(s)"));
}

#[test]
fn report_json_respects_date_range() {
    let dir = data_dir();
    let output = spendlens(&dir)
        .args([
            "report",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
            "--format",
            "json",
            "--as-of",
            "2024-02-15",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let summary = &value["summary"];
    assert_eq!(summary["total_spent"], 30.0);
    assert_eq!(summary["expense_count"], 2);
    assert_eq!(summary["category_breakdown"][0]["name"], "Food");
    assert_eq!(summary["vendor_spend"][0]["name"], "Bistro");
    assert_eq!(summary["budget"]["used_percent"], 30);
}

#[test]
fn report_csv_written_to_file() {
    let dir = data_dir();
    let out = dir.path().join("report.csv");
    spendlens(&dir)
        .args(["report", "--format", "csv", "--as-of", "2024-02-15", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(contains("Report exported to"));

    let text = fs::read_to_string(out).unwrap();
    assert!(text.starts_with("Section,Name,Amount,Count,Percentage"));
    assert!(text.contains("total,TOTAL,35.00,3,"));
}

#[test]
fn expenses_filtered_by_category_name() {
    let dir = data_dir();
    spendlens(&dir)
        .args(["expenses", "--category", "food"])
        .assert()
        .success()
        .stdout(contains("Filtered Expenses (2)"))
        .stdout(contains("Bistro"))
        .stdout(contains("Market"));
}

#[test]
fn expenses_limit_reports_remainder() {
    let dir = data_dir();
    spendlens(&dir)
        .args(["expenses", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("Filtered Expenses (3)"))
        .stdout(contains("... 2 more"));
}

#[test]
fn vendors_lists_each_vendor_once() {
    let dir = data_dir();
    spendlens(&dir)
        .arg("vendors")
        .assert()
        .success()
        .stdout(predicate::eq("Market\nBistro\n"));
}

#[test]
fn inverted_date_range_fails() {
    let dir = data_dir();
    spendlens(&dir)
        .args(["report", "--from", "2024-02-01", "--to", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("is after end date"));
}

#[test]
fn unknown_category_fails() {
    let dir = data_dir();
    spendlens(&dir)
        .args(["report", "--category", "Rent"])
        .assert()
        .failure()
        .stderr(contains("Rent"));
}

#[test]
fn missing_snapshots_give_empty_report() {
    let dir = TempDir::new().unwrap();
    spendlens(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(contains("Total Spent:    $0.00"));
}

#[test]
fn report_names_the_category_filter() {
    let dir = data_dir();
    spendlens(&dir)
        .args(["report", "--category", "1", "--as-of", "2024-02-15"])
        .assert()
        .success()
        .stdout(contains("Filters:        category \"Food\""))
        .stdout(contains("Total Spent:    $30.00"));
}

#[test]
fn report_accepts_offsetless_iso_datetimes() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("expenses.json"),
        r#"[{"id": 1, "vendor": "Cafe", "amount": 4.5, "date": "2024-01-05T10:00:00"}]"#,
    )
    .unwrap();

    spendlens(&dir)
        .args(["report", "--as-of", "2024-01-31"])
        .assert()
        .success()
        .stdout(contains("Total Spent:    $4.50"))
        .stdout(contains("Skipped").not());
}

#[test]
fn config_set_is_saved_and_used() {
    let dir = data_dir();
    spendlens(&dir)
        .args(["config", "set", "currency_symbol", "€"])
        .assert()
        .success()
        .stdout(contains("Set currency_symbol = €"));

    let saved = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(saved.contains("€"));

    spendlens(&dir)
        .args(["report", "--as-of", "2024-02-15"])
        .assert()
        .success()
        .stdout(contains("Total Spent:    €35.00"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let dir = data_dir();
    spendlens(&dir)
        .args(["config", "set", "theme", "dark"])
        .assert()
        .failure()
        .stderr(contains("Unknown setting"));
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn config_shows_paths() {
    let dir = data_dir();
    spendlens(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("expenses.json"))
        .stdout(contains("Trend months:    6"));
}

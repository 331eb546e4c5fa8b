//! E2E тесты для CLI инструмента `reporter`.
//!
//! Проверяем сводный отчёт, фильтры, поиск по идентификатору,
//! экспорт выборки и обработку повреждённых файлов.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Получить путь к фикстуре.
fn fixture(name: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

/// Создать команду для запуска reporter.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn reporter() -> Command {
    Command::cargo_bin("reporter").unwrap()
}

// ============================================================================
// Сводный отчёт
// ============================================================================

#[test]
fn test_json_summary() {
    reporter()
        .args(["--input", fixture("transactions.json").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 8"))
        .stdout(predicate::str::contains("Types: credit, debit, transfer"))
        .stdout(predicate::str::contains("Total amount: 921.60"))
        .stdout(predicate::str::contains("Average amount: 115.2"))
        .stdout(predicate::str::contains("Total debit amount: 450.6"))
        .stdout(predicate::str::contains("Dominant type: debit"))
        .stdout(predicate::str::contains("Most profitable month: 3"))
        .stdout(predicate::str::contains("Most profitable debit month: 3"));
}

#[test]
fn test_csv_summary_matches_json() {
    // Оба формата содержат одни и те же записи
    reporter()
        .args(["--input", fixture("transactions.csv").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 8"))
        .stdout(predicate::str::contains("Total amount: 921.60"))
        .stdout(predicate::str::contains("Total debit amount: 450.60"))
        .stdout(predicate::str::contains("Most profitable month: 3"));
}

// ============================================================================
// Фильтры и поиск
// ============================================================================

#[test]
fn test_filter_by_type_lists_records() {
    reporter()
        .args([
            "--input",
            fixture("transactions.json").to_str().unwrap(),
            "--tx-type",
            "debit",
            "--list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected 5 of 8 transaction(s)"))
        .stdout(predicate::str::contains("\"TYPE\":\"debit\""))
        .stdout(predicate::str::contains("\"TYPE\":\"credit\"").not());
}

#[test]
fn test_date_range_filter() {
    reporter()
        .args([
            "--input",
            fixture("transactions.json").to_str().unwrap(),
            "--from",
            "2019-03-01",
            "--to",
            "2019-03-31",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected 3 of 8 transaction(s)"))
        .stdout(predicate::str::contains("Total amount: 380.75"));
}

#[test]
fn test_filter_by_merchant() {
    reporter()
        .args([
            "--input",
            fixture("transactions.json").to_str().unwrap(),
            "--merchant",
            "CoffeeCorner",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected 2 of 8 transaction(s)"))
        .stdout(predicate::str::contains("Total amount: 115.5"));
}

#[test]
fn test_lookup_by_id() {
    reporter()
        .args(["--input", fixture("transactions.json").to_str().unwrap(), "--id", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TechWorld"));
}

#[test]
fn test_lookup_by_missing_id_fails() {
    reporter()
        .args(["--input", fixture("transactions.json").to_str().unwrap(), "--id", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ============================================================================
// Экспорт выборки
// ============================================================================

#[test]
fn test_export_selection_to_csv() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("coffee.csv");

    reporter()
        .args([
            "--input",
            fixture("transactions.json").to_str().unwrap(),
            "--merchant",
            "CoffeeCorner",
            "--export",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("ID,TYPE,"));
    // Заголовок и две записи CoffeeCorner
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_export_selection_to_json() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("debits.json");

    reporter()
        .args([
            "--input",
            fixture("transactions.csv").to_str().unwrap(),
            "--tx-type",
            "debit",
            "--export",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.trim_start().starts_with('['));
    assert!(content.contains("\"TYPE\": \"debit\""));
}

// ============================================================================
// Повреждённые данные и ошибки
// ============================================================================

#[test]
fn test_malformed_records_are_skipped() {
    // Запись с нечитаемым id пропускается, остальные загружаются
    reporter()
        .args(["--input", fixture("transactions_malformed.json").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 2"))
        .stdout(predicate::str::contains("Total amount: 10.5"));
}

#[test]
fn test_missing_input_file() {
    reporter()
        .args(["--input", "/nonexistent/path/to/transactions.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

// ============================================================================
// Чтение из stdin
// ============================================================================

#[test]
fn test_stdin_with_explicit_format() {
    let input_data = fs::read(fixture("transactions.csv")).unwrap();

    reporter()
        .args(["--format", "csv"])
        .write_stdin(input_data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 8"));
}

#[test]
fn test_stdin_requires_format() {
    reporter()
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format"));
}

//! # e2e-tests - End-to-end тесты CLI инструментов
//!
//! Этот крейт содержит e2e тесты для CLI инструмента воркспейса:
//! - `reporter` — сводный отчёт по файлу транзакций
//!
//! ## Фикстуры
//!
//! Тестовые файлы расположены в `fixtures/`:
//! - `transactions.json` — массив записей в исходном JSON-виде
//! - `transactions.csv` — те же записи в CSV
//! - `transactions_malformed.json` — массив с повреждённой записью

use std::path::PathBuf;

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

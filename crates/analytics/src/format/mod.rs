//! Файловые форматы коллекций транзакций.
//!
//! Поддерживаются два формата:
//!
//! - **JSON** — массив объектов с полями исходного вида
//!   (`transaction_id`, `transaction_type`, ...)
//! - **CSV** — таблица с фиксированной строкой заголовка
//!
//! Оба формата читаются целиком в `Vec<Transaction>`. Щадящая загрузка
//! [`read_lossy`] пропускает записи, которые не удалось разобрать,
//! подсчитывая их количество вместо прерывания всей загрузки.

pub mod csv;
pub mod json;

use std::io::Read;

use crate::error::FormatResult;
use crate::transaction::Transaction;

/// Формат файла с транзакциями, выбираемый во время выполнения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON-массив объектов.
    Json,
    /// CSV с заголовком.
    Csv,
}

impl Format {
    /// Определяет формат по расширению файла.
    ///
    /// # Примеры
    ///
    /// ```
    /// use analytics::format::Format;
    ///
    /// assert_eq!(Format::from_extension("json"), Some(Format::Json));
    /// assert_eq!(Format::from_extension("CSV"), Some(Format::Csv));
    /// assert_eq!(Format::from_extension("bin"), None);
    /// ```
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Результат щадящей загрузки: записи и количество пропущенных строк.
#[derive(Debug)]
pub struct LossyLoad {
    /// Успешно разобранные записи в порядке следования в файле.
    pub transactions: Vec<Transaction>,
    /// Количество записей, которые не удалось разобрать.
    pub skipped: usize,
}

/// Читает все записи из источника, пропуская нечитаемые.
///
/// Запись, которую не удалось разобрать целиком, не прерывает загрузку:
/// она пропускается и учитывается в счётчике
/// [`skipped`](LossyLoad::skipped). Запись с отсутствующей суммой или
/// нечитаемой датой считается разобранной: поле остаётся пустым, и
/// запись исключается только из агрегатов по этому полю.
///
/// Ошибки ввода/вывода и нечитаемый корень документа по-прежнему
/// завершают загрузку ошибкой.
pub fn read_lossy<R: Read>(reader: R, format: Format) -> FormatResult<LossyLoad> {
    match format {
        Format::Json => json::read_lossy(reader),
        Format::Csv => csv::read_lossy(reader),
    }
}

/// Читает все записи из источника; первая нечитаемая запись прерывает
/// загрузку ошибкой.
pub fn read_all<R: Read>(reader: R, format: Format) -> FormatResult<Vec<Transaction>> {
    match format {
        Format::Json => json::read_all(reader),
        Format::Csv => csv::read_all(reader),
    }
}

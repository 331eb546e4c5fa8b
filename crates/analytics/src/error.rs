//! Модуль ошибок загрузки и выгрузки транзакций.
//!
//! Ошибки возникают только на файловой границе. Сами аналитические
//! запросы хранилища не возвращают ошибок: отсутствие совпадений
//! выражается пустым результатом или `None`.

use thiserror::Error;

/// Ошибка работы с файловыми форматами транзакций.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Ошибка ввода/вывода.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Некорректный JSON-документ.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Некорректная CSV-строка.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Корневой элемент JSON-файла не является массивом записей.
    #[error("Expected a JSON array of transaction records")]
    ExpectedArray,

    /// Неожиданный конец файла.
    #[error("Unexpected end of file")]
    UnexpectedEof,
}

/// Удобный alias для Result с FormatError.
pub type FormatResult<T> = Result<T, FormatError>;

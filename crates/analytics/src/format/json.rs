//! JSON-формат: массив объектов с полями исходного вида.
//!
//! Входной файл — массив записей с именами полей `transaction_id`,
//! `transaction_type`, `transaction_amount`, `transaction_date`,
//! `merchant_name`, `transaction_description`. На границе имена
//! преобразуются в поля [`Transaction`].
//!
//! # Пример входного файла
//!
//! ```json
//! [
//!   {
//!     "transaction_id": 1,
//!     "transaction_type": "debit",
//!     "transaction_amount": 28.35,
//!     "transaction_date": "2019-01-01",
//!     "merchant_name": "SuperMart",
//!     "transaction_description": "Grocery purchase"
//!   }
//! ]
//! ```

use std::io::{Read, Write};

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::LossyLoad;
use crate::error::{FormatError, FormatResult};
use crate::transaction::Transaction;

/// Запись в том виде, в каком она лежит в JSON-файле.
#[derive(Debug, Deserialize)]
struct RawRecord {
    transaction_id: u64,
    transaction_type: String,
    #[serde(default)]
    transaction_amount: Option<Decimal>,
    #[serde(default)]
    transaction_date: Option<String>,
    #[serde(default)]
    merchant_name: String,
    #[serde(default)]
    transaction_description: String,
}

impl From<RawRecord> for Transaction {
    fn from(raw: RawRecord) -> Self {
        Self {
            id: raw.transaction_id,
            tx_type: raw.transaction_type,
            amount: raw.transaction_amount,
            // Нечитаемая дата не отбрасывает запись, а оставляет поле пустым
            date: raw.transaction_date.and_then(|s| s.trim().parse::<Date>().ok()),
            merchant: raw.merchant_name,
            description: raw.transaction_description,
        }
    }
}

/// Читает все записи из JSON-массива.
///
/// Первая нечитаемая запись прерывает загрузку ошибкой. Для загрузки с
/// пропуском повреждённых записей используйте [`read_lossy`].
pub fn read_all<R: Read>(reader: R) -> FormatResult<Vec<Transaction>> {
    let values = read_array(reader)?;
    let mut transactions = Vec::with_capacity(values.len());
    for value in values {
        let raw: RawRecord = serde_json::from_value(value)?;
        transactions.push(raw.into());
    }
    Ok(transactions)
}

/// Читает записи из JSON-массива, пропуская нечитаемые.
///
/// Нечитаемый корень документа (не массив, битый JSON) по-прежнему
/// возвращает ошибку.
pub fn read_lossy<R: Read>(reader: R) -> FormatResult<LossyLoad> {
    let values = read_array(reader)?;
    let mut transactions = Vec::with_capacity(values.len());
    let mut skipped = 0usize;
    for value in values {
        match serde_json::from_value::<RawRecord>(value) {
            Ok(raw) => transactions.push(raw.into()),
            Err(_) => skipped += 1,
        }
    }
    Ok(LossyLoad { transactions, skipped })
}

/// Записывает записи одним JSON-массивом.
pub fn write_all<W: Write>(writer: W, transactions: &[Transaction]) -> FormatResult<()> {
    serde_json::to_writer_pretty(writer, transactions)?;
    Ok(())
}

fn read_array<R: Read>(reader: R) -> FormatResult<Vec<serde_json::Value>> {
    let root: serde_json::Value = serde_json::from_reader(reader)?;
    match root {
        serde_json::Value::Array(values) => Ok(values),
        _ => Err(FormatError::ExpectedArray),
    }
}

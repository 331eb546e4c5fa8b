//! Структура записи транзакции и её сериализация.

use std::fmt;

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Запись финансовой транзакции.
///
/// Поля `amount` и `date` необязательные: запись, в которой сумма не
/// указана или дата не разбирается, остаётся в коллекции, но исключается
/// из агрегатов по соответствующему полю.
///
/// Имена колонок в `#[serde(rename)]` задают порядок и заголовок CSV.
///
/// # Пример
///
/// ```
/// use analytics::transaction::Transaction;
/// use jiff::civil::date;
/// use rust_decimal::Decimal;
///
/// let tx = Transaction {
///     id: 1,
///     tx_type: "debit".to_string(),
///     amount: Some(Decimal::new(2835, 2)),
///     date: Some(date(2019, 1, 1)),
///     merchant: "SuperMart".to_string(),
///     description: "Покупка продуктов".to_string(),
/// };
///
/// assert_eq!(tx.tx_type, "debit");
/// assert!(tx.to_json().unwrap().contains("SuperMart"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Идентификатор записи. Уникальность хранилищем не контролируется.
    #[serde(rename = "ID")]
    pub id: u64,
    /// Тип транзакции ("debit", "credit", ...). Перечисление открытое,
    /// запросы сравнивают значение точно, с учётом регистра.
    #[serde(rename = "TYPE")]
    pub tx_type: String,
    /// Сумма транзакции, знак и величина не ограничены.
    /// `None`, если в исходной записи сумма отсутствует.
    #[serde(rename = "AMOUNT", default)]
    pub amount: Option<Decimal>,
    /// Календарная дата без часового пояса.
    /// `None`, если дата в исходной записи не разбирается.
    #[serde(rename = "DATE", deserialize_with = "lenient_date", default)]
    pub date: Option<Date>,
    /// Имя продавца.
    #[serde(rename = "MERCHANT")]
    pub merchant: String,
    /// Человекочитаемое описание.
    #[serde(rename = "DESCRIPTION")]
    pub description: String,
}

impl Transaction {
    /// Сериализует запись в JSON-строку.
    ///
    /// Единое представление для любой записи; им пользуются и [`fmt::Display`],
    /// и построчный вывод записей в CLI.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// Разбирает дату, не прерывая загрузку записи: нечитаемое значение
/// превращается в `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

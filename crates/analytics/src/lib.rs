//! Библиотека аналитики финансовых транзакций.
//!
//! Крейт предоставляет модель данных [`Transaction`](transaction::Transaction),
//! хранилище [`TransactionStore`](store::TransactionStore) с набором
//! аналитических запросов (суммы, средние, фильтры по типу, дате, продавцу
//! и сумме, самый прибыльный месяц) и модуль [`format`] для загрузки
//! записей из JSON- и CSV-файлов.
//!
//! Хранилище однопоточное и пересчитывает каждый запрос полным проходом
//! по коллекции; индексов и кэшей нет.
//!
//! # Быстрый старт
//!
//! ```
//! use analytics::prelude::*;
//! use jiff::civil::date;
//! use rust_decimal::Decimal;
//!
//! let mut store = TransactionStore::new();
//! store.append(Transaction {
//!     id: 1,
//!     tx_type: "debit".to_string(),
//!     amount: Some(Decimal::new(10050, 2)),
//!     date: Some(date(2019, 2, 2)),
//!     merchant: "SuperMart".to_string(),
//!     description: "Покупка продуктов".to_string(),
//! });
//!
//! assert_eq!(store.len(), 1);
//! assert!(store.find_by_id(1).is_some());
//! assert!(store.find_by_id(99).is_none());
//! ```

pub mod error;
pub mod format;
pub mod prelude;
pub mod store;
pub mod transaction;

//! Модель данных финансовой транзакции.
//!
//! Модуль определяет запись [`Transaction`] — одну финансовую операцию
//! с идентификатором, типом, суммой, календарной датой, именем продавца
//! и описанием. Записи независимы друг от друга; никакой инвариант не
//! связывает одну запись с другой.

mod types;

pub use types::Transaction;

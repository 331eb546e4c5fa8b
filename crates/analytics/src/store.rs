//! Хранилище транзакций и аналитические запросы над ним.
//!
//! [`TransactionStore`] владеет упорядоченной коллекцией записей и
//! отвечает на запросы полным линейным проходом. Вторичных индексов и
//! кэшей нет: каждый вызов пересчитывает результат заново.
//!
//! Хранилище однопоточное и внутренней синхронизации не содержит.
//! Если коллекция разделяется между потоками, оборачивайте её в
//! `std::sync::RwLock`: запросы берут читающую блокировку,
//! [`append`](TransactionStore::append) — пишущую.

use std::cmp::Ordering;
use std::collections::HashSet;

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::transaction::Transaction;

/// Значение поля `tx_type` дебетовых записей.
pub const DEBIT: &str = "debit";
/// Значение поля `tx_type` кредитовых записей.
pub const CREDIT: &str = "credit";

/// Результат сравнения количества дебетовых и кредитовых записей.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantType {
    /// Дебетовых записей больше.
    Debit,
    /// Кредитовых записей больше.
    Credit,
    /// Количества совпадают.
    Equal,
}

impl DominantType {
    /// Возвращает строковое представление результата.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
            Self::Equal => "equal",
        }
    }
}

/// Хранилище транзакций: упорядоченная коллекция и запросы над ней.
///
/// Записи хранятся в порядке добавления; операций удаления и изменения
/// нет. Запись без суммы или с нечитаемой датой остаётся в коллекции,
/// но не участвует в агрегатах по соответствующему полю.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Создаёт пустое хранилище.
    #[must_use]
    pub fn new() -> Self {
        Self { transactions: Vec::new() }
    }

    /// Создаёт хранилище, заполненное готовым списком записей.
    #[must_use]
    pub fn from_records(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Добавляет запись в конец коллекции.
    ///
    /// Поля не проверяются: запись сохраняется как есть.
    pub fn append(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    /// Возвращает все записи в порядке добавления.
    #[must_use]
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Количество записей в коллекции.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Проверяет, пуста ли коллекция.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Возвращает множество различных типов транзакций.
    ///
    /// Каждое значение встречается один раз; порядок не определён.
    #[must_use]
    pub fn unique_types(&self) -> HashSet<&str> {
        self.transactions.iter().map(|tx| tx.tx_type.as_str()).collect()
    }

    /// Сумма всех транзакций. Для пустой коллекции — ноль.
    ///
    /// Записи без суммы в расчёте не участвуют.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.transactions.iter().filter_map(|tx| tx.amount).sum()
    }

    /// Сумма транзакций за указанный календарный день.
    ///
    /// Месяц задаётся по календарному соглашению, от 1 до 12.
    /// Если совпадений нет — ноль.
    #[must_use]
    pub fn total_amount_on_date(&self, year: i16, month: i8, day: i8) -> Decimal {
        self.transactions
            .iter()
            .filter(|tx| {
                tx.date.is_some_and(|d| d.year() == year && d.month() == month && d.day() == day)
            })
            .filter_map(|tx| tx.amount)
            .sum()
    }

    /// Возвращает записи заданного типа.
    ///
    /// Сравнение точное, с учётом регистра. Нет совпадений — пустой список.
    #[must_use]
    pub fn by_type(&self, tx_type: &str) -> Vec<&Transaction> {
        self.transactions.iter().filter(|tx| tx.tx_type == tx_type).collect()
    }

    /// Возвращает записи с датой в диапазоне `[start, end]`, включая обе
    /// границы.
    ///
    /// Даты сравниваются как календарные, а не как строки, поэтому
    /// результат не зависит от формата записи даты. Записи без даты в
    /// результат не попадают.
    #[must_use]
    pub fn in_date_range(&self, start: Date, end: Date) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.date.is_some_and(|d| start <= d && d <= end))
            .collect()
    }

    /// Возвращает записи указанного продавца (точное совпадение имени).
    #[must_use]
    pub fn by_merchant(&self, merchant: &str) -> Vec<&Transaction> {
        self.transactions.iter().filter(|tx| tx.merchant == merchant).collect()
    }

    /// Средняя сумма транзакции.
    ///
    /// Среднее берётся по записям, у которых сумма указана. Если таких
    /// записей нет — в том числе для пустой коллекции — возвращается
    /// `None`; деления на ноль не происходит.
    #[must_use]
    pub fn average_amount(&self) -> Option<Decimal> {
        let mut total = Decimal::ZERO;
        let mut count = 0u64;
        for amount in self.transactions.iter().filter_map(|tx| tx.amount) {
            total += amount;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(total / Decimal::from(count))
    }

    /// Возвращает записи с суммой строго между `min` и `max`.
    ///
    /// Обе границы исключаются. Записи без суммы в результат не попадают.
    #[must_use]
    pub fn by_amount_range(&self, min: Decimal, max: Decimal) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.amount.is_some_and(|a| min < a && a < max))
            .collect()
    }

    /// Сумма дебетовых транзакций. Если их нет — ноль.
    #[must_use]
    pub fn total_debit_amount(&self) -> Decimal {
        self.transactions
            .iter()
            .filter(|tx| tx.tx_type == DEBIT)
            .filter_map(|tx| tx.amount)
            .sum()
    }

    /// Самый прибыльный календарный месяц (номер от 1 до 12).
    ///
    /// Суммы накапливаются по номеру месяца за все годы сразу, одним
    /// проходом по коллекции. `type_filter` ограничивает расчёт записями
    /// заданного типа. Побеждает месяц со строго наибольшей суммой; при
    /// равенстве — меньший номер. Если все месячные суммы нулевые
    /// (например, коллекция пуста), возвращается месяц 1.
    #[must_use]
    pub fn most_profitable_month(&self, type_filter: Option<&str>) -> i8 {
        let mut by_month = [Decimal::ZERO; 12];
        for tx in &self.transactions {
            if let Some(wanted) = type_filter
                && tx.tx_type != wanted
            {
                continue;
            }
            if let (Some(date), Some(amount)) = (tx.date, tx.amount) {
                by_month[date.month() as usize - 1] += amount;
            }
        }

        let mut best_month: i8 = 1;
        let mut best_amount = by_month[0];
        for (idx, &amount) in by_month.iter().enumerate().skip(1) {
            if amount > best_amount {
                best_amount = amount;
                best_month = idx as i8 + 1;
            }
        }
        best_month
    }

    /// Сравнивает количество дебетовых и кредитовых записей.
    ///
    /// Сравниваются именно количества записей. Записи других типов в
    /// сравнении не участвуют.
    #[must_use]
    pub fn dominant_transaction_type(&self) -> DominantType {
        let mut debits = 0usize;
        let mut credits = 0usize;
        for tx in &self.transactions {
            match tx.tx_type.as_str() {
                DEBIT => debits += 1,
                CREDIT => credits += 1,
                _ => {}
            }
        }
        match debits.cmp(&credits) {
            Ordering::Greater => DominantType::Debit,
            Ordering::Less => DominantType::Credit,
            Ordering::Equal => DominantType::Equal,
        }
    }

    /// Возвращает записи с датой строго раньше указанной.
    ///
    /// Записи без даты в результат не попадают.
    #[must_use]
    pub fn before_date(&self, date: Date) -> Vec<&Transaction> {
        self.transactions.iter().filter(|tx| tx.date.is_some_and(|d| d < date)).collect()
    }

    /// Находит первую запись с указанным идентификатором.
    ///
    /// Если записи нет, возвращается `None`.
    #[must_use]
    pub fn find_by_id(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    /// Возвращает описания всех записей в порядке добавления,
    /// включая повторы.
    #[must_use]
    pub fn descriptions(&self) -> Vec<&str> {
        self.transactions.iter().map(|tx| tx.description.as_str()).collect()
    }
}

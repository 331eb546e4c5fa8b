//! CSV-формат транзакций.
//!
//! Потоковое чтение и запись записей в CSV с фиксированной строкой
//! заголовка. Колонки соответствуют serde-именам полей [`Transaction`].
//!
//! # Формат
//!
//! ```csv
//! ID,TYPE,AMOUNT,DATE,MERCHANT,DESCRIPTION
//! 1,debit,28.35,2019-01-01,SuperMart,Grocery purchase
//! ```
//!
//! # Потоковое чтение
//!
//! ```ignore
//! use analytics::format::csv;
//! use std::fs::File;
//!
//! let file = File::open("transactions.csv")?;
//! for result in csv::iter_reader(file) {
//!     let tx = result?;
//!     println!("{tx}");
//! }
//! ```

use std::io::{BufRead, BufReader, Read, Write};

use super::LossyLoad;
use crate::error::{FormatError, FormatResult};
use crate::transaction::Transaction;

/// Строка заголовка CSV со всеми именами колонок.
pub const HEADER: &str = "ID,TYPE,AMOUNT,DATE,MERCHANT,DESCRIPTION";

// ============================================================================
// Потоковое чтение
// ============================================================================

/// Читает одну запись из CSV-потока.
///
/// Заголовок должен быть уже пропущен (см. [`skip_header`]). Пустые
/// строки пропускаются. Возвращает `Ok(Some(tx))`, если запись
/// прочитана, и `Ok(None)` в конце файла.
pub fn read_one<R: BufRead>(reader: &mut R) -> FormatResult<Option<Transaction>> {
    match next_line(reader)? {
        Some(line) => parse_line(&line).map(Some),
        None => Ok(None),
    }
}

/// Пропускает строку заголовка.
///
/// Вызывается один раз перед чтением первой записи. Для пустого файла
/// тоже возвращает `Ok(())`.
pub fn skip_header<R: BufRead>(reader: &mut R) -> FormatResult<()> {
    let mut header = String::new();
    reader.read_line(&mut header)?;
    Ok(())
}

/// Создаёт итератор по записям CSV-источника.
///
/// Заголовок пропускается автоматически при первом чтении. Первая
/// ошибка завершает итерацию.
pub fn iter_reader<R: Read>(reader: R) -> impl Iterator<Item = FormatResult<Transaction>> {
    CsvReaderIterator { reader: BufReader::new(reader), header_skipped: false, finished: false }
}

/// Читает все записи; первая нечитаемая строка прерывает загрузку.
pub fn read_all<R: Read>(reader: R) -> FormatResult<Vec<Transaction>> {
    iter_reader(reader).collect()
}

/// Читает все записи, пропуская нечитаемые строки.
///
/// Ошибки ввода/вывода по-прежнему прерывают загрузку: щадящий режим
/// относится к содержимому строк, а не к самому источнику.
pub fn read_lossy<R: Read>(reader: R) -> FormatResult<LossyLoad> {
    let mut reader = BufReader::new(reader);
    skip_header(&mut reader)?;

    let mut transactions = Vec::new();
    let mut skipped = 0usize;
    while let Some(line) = next_line(&mut reader)? {
        match parse_line(&line) {
            Ok(tx) => transactions.push(tx),
            Err(_) => skipped += 1,
        }
    }
    Ok(LossyLoad { transactions, skipped })
}

/// Итератор потокового чтения CSV.
struct CsvReaderIterator<R> {
    reader: R,
    header_skipped: bool,
    finished: bool,
}

impl<R: BufRead> Iterator for CsvReaderIterator<R> {
    type Item = FormatResult<Transaction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        // Skip header on first read
        if !self.header_skipped {
            self.header_skipped = true;
            if let Err(e) = skip_header(&mut self.reader) {
                self.finished = true;
                return Some(Err(e));
            }
        }

        match read_one(&mut self.reader) {
            Ok(Some(tx)) => Some(Ok(tx)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Читает следующую непустую строку. `None` в конце файла.
fn next_line<R: BufRead>(reader: &mut R) -> FormatResult<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
}

/// Разбирает одну строку CSV в запись.
fn parse_line(line: &str) -> FormatResult<Transaction> {
    let mut csv_reader =
        ::csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(line.as_bytes());

    match csv_reader.deserialize().next() {
        Some(Ok(tx)) => Ok(tx),
        Some(Err(e)) => Err(FormatError::Csv(e)),
        None => Err(FormatError::UnexpectedEof),
    }
}

// ============================================================================
// Запись
// ============================================================================

/// Записывает строку заголовка.
pub fn write_header<W: Write>(writer: &mut W) -> FormatResult<()> {
    writeln!(writer, "{}", HEADER)?;
    Ok(())
}

/// Записывает одну запись строкой CSV.
pub fn write_one<W: Write>(writer: &mut W, tx: &Transaction) -> FormatResult<()> {
    let mut csv_writer = ::csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.serialize(tx)?;
    csv_writer.flush()?;

    Ok(())
}

/// Записывает заголовок и все записи.
pub fn write_all<W: Write>(mut writer: W, transactions: &[Transaction]) -> FormatResult<()> {
    write_header(&mut writer)?;
    for tx in transactions {
        write_one(&mut writer, tx)?;
    }
    Ok(())
}

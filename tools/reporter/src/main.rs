//! CLI tool for summarizing transaction files in JSON or CSV format.
//!
//! # Usage
//!
//! ```bash
//! # Full summary of a JSON file
//! reporter --input transactions.json
//!
//! # Look up a single record by id
//! reporter --input transactions.json --id 123
//!
//! # Filter by type, list the records and export them as CSV
//! reporter --input transactions.json --tx-type debit --list --export debits.csv
//!
//! # Read CSV from stdin, summarize records between two dates
//! cat transactions.csv | reporter --format csv --from 2019-01-01 --to 2019-03-31
//! ```

use std::fs::File;
use std::io::{BufWriter, Read, Write, stdin};
use std::path::{Path, PathBuf};

use analytics::prelude::*;
use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use jiff::civil::Date;
use tracing::{info, warn};

/// Summarize and filter financial transaction records.
///
/// Reads a transaction file (JSON array or CSV table), loads it into an
/// in-memory store and prints aggregate analytics: totals, averages,
/// the most profitable month and the dominant transaction type.
/// Optional filters narrow the selection before the summary is printed.
#[derive(Parser, Debug)]
#[command(name = "reporter")]
#[command(version, about)]
struct Args {
    /// Input file path. If not specified, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input format. Defaults to the input file extension.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Print the record with this id and exit.
    #[arg(long, conflicts_with_all = ["tx_type", "merchant", "from", "to", "list", "export"])]
    id: Option<u64>,

    /// Keep only records of this transaction type (exact match).
    #[arg(long)]
    tx_type: Option<String>,

    /// Keep only records of this merchant (exact match).
    #[arg(long)]
    merchant: Option<String>,

    /// Keep only records dated on or after this date (YYYY-MM-DD).
    #[arg(long)]
    from: Option<Date>,

    /// Keep only records dated on or before this date (YYYY-MM-DD).
    #[arg(long)]
    to: Option<Date>,

    /// Print each selected record as a JSON line before the summary.
    #[arg(long)]
    list: bool,

    /// Write the selected records to this file (format by extension).
    #[arg(long)]
    export: Option<PathBuf>,
}

/// Supported transaction file formats for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// JSON array of record objects.
    Json,
    /// CSV table with a header row.
    Csv,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Csv => Format::Csv,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let format = resolve_format(&args)?;
    let input: Box<dyn Read> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdin().lock()),
    };

    let loaded = analytics::format::read_lossy(input, format)
        .context("Failed to read transaction records")?;
    if loaded.skipped > 0 {
        warn!(skipped = loaded.skipped, "records could not be parsed and were skipped");
    }
    info!(count = loaded.transactions.len(), "loaded transactions");

    let store = TransactionStore::from_records(loaded.transactions);

    // Single-record lookup short-circuits the report
    if let Some(id) = args.id {
        match store.find_by_id(id) {
            Some(tx) => println!("{tx}"),
            None => bail!("Transaction with id {id} not found"),
        }
        return Ok(());
    }

    let selection = select(&store, &args);

    if args.list {
        for tx in &selection {
            println!("{tx}");
        }
    }

    if has_filters(&args) {
        println!("Selected {} of {} transaction(s)", selection.len(), store.len());
        let sub = TransactionStore::from_records(selection.iter().map(|tx| (*tx).clone()).collect());
        print_summary(&sub);
    } else {
        print_summary(&store);
    }

    if let Some(path) = &args.export {
        export(path, &selection)?;
    }

    Ok(())
}

/// Picks the input format from the flag, falling back to the file extension.
fn resolve_format(args: &Args) -> Result<Format> {
    if let Some(format) = args.format {
        return Ok(format.into());
    }
    let Some(path) = &args.input else {
        bail!("--format is required when reading from stdin");
    };
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    Format::from_extension(ext)
        .with_context(|| format!("Cannot determine format of '{}'; pass --format", path.display()))
}

fn has_filters(args: &Args) -> bool {
    args.tx_type.is_some() || args.merchant.is_some() || args.from.is_some() || args.to.is_some()
}

/// Applies the command-line filters to the store.
///
/// Date bounds use the store's inclusive calendar-range query; type and
/// merchant filters narrow the selection with exact matches.
fn select<'a>(store: &'a TransactionStore, args: &Args) -> Vec<&'a Transaction> {
    let mut selection: Vec<&Transaction> = if args.from.is_some() || args.to.is_some() {
        let from = args.from.unwrap_or(Date::MIN);
        let to = args.to.unwrap_or(Date::MAX);
        store.in_date_range(from, to)
    } else if let Some(tx_type) = &args.tx_type {
        store.by_type(tx_type)
    } else if let Some(merchant) = &args.merchant {
        store.by_merchant(merchant)
    } else {
        store.all().iter().collect()
    };

    if let Some(tx_type) = &args.tx_type {
        selection.retain(|tx| tx.tx_type == *tx_type);
    }
    if let Some(merchant) = &args.merchant {
        selection.retain(|tx| tx.merchant == *merchant);
    }
    selection
}

/// Prints the aggregate report over a store.
fn print_summary(store: &TransactionStore) {
    println!("Transactions: {}", store.len());

    let mut types: Vec<&str> = store.unique_types().into_iter().collect();
    types.sort_unstable();
    println!("Types: {}", if types.is_empty() { "-".to_string() } else { types.join(", ") });

    println!("Total amount: {}", store.total_amount());
    match store.average_amount() {
        Some(avg) => println!("Average amount: {}", avg.round_dp(2)),
        None => println!("Average amount: n/a"),
    }
    println!("Total debit amount: {}", store.total_debit_amount());
    println!("Dominant type: {}", store.dominant_transaction_type().as_str());
    println!("Most profitable month: {}", store.most_profitable_month(None));
    println!("Most profitable debit month: {}", store.most_profitable_month(Some(DEBIT)));
}

/// Writes the selected records to a file; the format is determined by
/// the file extension.
fn export(path: &Path, selection: &[&Transaction]) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let Some(format) = Format::from_extension(ext) else {
        bail!("Cannot determine export format of '{}'", path.display());
    };

    let records: Vec<Transaction> = selection.iter().map(|tx| (*tx).clone()).collect();
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match format {
        Format::Json => analytics::format::json::write_all(&mut writer, &records)?,
        Format::Csv => analytics::format::csv::write_all(&mut writer, &records)?,
    }
    writer.flush().context("Failed to flush export file")?;

    info!(count = records.len(), path = %path.display(), "exported selection");
    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_store() -> TransactionStore {
        let tx = |id: u64, tx_type: &str, merchant: &str, d: Date| Transaction {
            id,
            tx_type: tx_type.to_string(),
            amount: Some(dec!(10)),
            date: Some(d),
            merchant: merchant.to_string(),
            description: String::new(),
        };
        TransactionStore::from_records(vec![
            tx(1, "debit", "SuperMart", date(2019, 1, 5)),
            tx(2, "credit", "Refundo", date(2019, 2, 10)),
            tx(3, "debit", "SuperMart", date(2019, 3, 15)),
            tx(4, "debit", "TechWorld", date(2019, 3, 20)),
        ])
    }

    fn args() -> Args {
        Args {
            input: None,
            format: None,
            id: None,
            tx_type: None,
            merchant: None,
            from: None,
            to: None,
            list: false,
            export: None,
        }
    }

    #[test]
    fn test_select_without_filters_returns_everything() {
        let store = sample_store();
        assert_eq!(select(&store, &args()).len(), 4);
    }

    #[test]
    fn test_select_by_type() {
        let store = sample_store();
        let mut a = args();
        a.tx_type = Some("debit".to_string());

        let ids: Vec<u64> = select(&store, &a).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_select_combines_dates_and_merchant() {
        let store = sample_store();
        let mut a = args();
        a.from = Some(date(2019, 2, 1));
        a.merchant = Some("SuperMart".to_string());

        let ids: Vec<u64> = select(&store, &a).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_select_open_ended_date_range() {
        let store = sample_store();
        let mut a = args();
        a.to = Some(date(2019, 2, 10));

        let ids: Vec<u64> = select(&store, &a).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_has_filters() {
        assert!(!has_filters(&args()));

        let mut a = args();
        a.merchant = Some("SuperMart".to_string());
        assert!(has_filters(&a));
    }
}

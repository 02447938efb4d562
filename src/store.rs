//! The ledger store trait and its CSV file implementation.
//!
//! The ledger is append-only: records are written once and never edited or
//! deleted, so the store surface is just create, append and read-all.

use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use csv::{StringRecord, WriterBuilder};

use crate::{Error, category::CategoryName, transaction::Transaction, validate};

/// The column header row every ledger file starts with.
const LEDGER_COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Handles persistence of the transaction ledger.
pub trait LedgerStore {
    /// Initialise an empty ledger containing only the column header.
    ///
    /// Any existing ledger at the same location is replaced.
    fn create(&mut self) -> Result<(), Error>;

    /// Append `records` to the end of the ledger, preserving existing rows.
    fn append(&mut self, records: &[Transaction]) -> Result<(), Error>;

    /// Read every record in the ledger, oldest row first.
    fn read_all(&self) -> Result<Vec<Transaction>, Error>;
}

/// A [LedgerStore] backed by a CSV file with a fixed four-column layout.
///
/// Dates are stored in the `dd/mm/yyyy` input format and amounts as their
/// decimal string, so a ledger row reads back as exactly the transaction
/// that was appended.
pub struct CsvLedgerStore {
    path: PathBuf,
}

impl CsvLedgerStore {
    /// Create a store that reads and writes the CSV file at `path`.
    ///
    /// The file itself is not touched until one of the [LedgerStore]
    /// operations is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether the ledger file exists on disk yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// The location of the ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for CsvLedgerStore {
    fn create(&mut self) -> Result<(), Error> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(LEDGER_COLUMNS)?;
        writer.flush()?;

        tracing::info!("created a new ledger at {}", self.path.display());

        Ok(())
    }

    fn append(&mut self, records: &[Transaction]) -> Result<(), Error> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        for record in records {
            let date_text = format_stored_date(record);
            let amount_text = record.amount.to_string();

            writer.write_record([
                date_text.as_str(),
                amount_text.as_str(),
                record.category.as_ref(),
                record.description.as_str(),
            ])?;
        }

        writer.flush()?;

        tracing::debug!(
            "appended {} records to the ledger at {}",
            records.len(),
            self.path.display()
        );

        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Transaction>, Error> {
        let mut reader = csv::Reader::from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        if headers.iter().ne(LEDGER_COLUMNS) {
            return Err(Error::InvalidHeader {
                expected: LEDGER_COLUMNS.join(","),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut transactions = Vec::new();

        for (index, result) in reader.records().enumerate() {
            let record = result?;
            // The header occupies row 1, so the first record is row 2.
            transactions.push(parse_row(&record, index + 2)?);
        }

        Ok(transactions)
    }
}

fn format_stored_date(record: &Transaction) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        record.date.day(),
        u8::from(record.date.month()),
        record.date.year()
    )
}

fn parse_row(record: &StringRecord, row: usize) -> Result<Transaction, Error> {
    if record.len() != LEDGER_COLUMNS.len() {
        return Err(Error::InvalidRow {
            row,
            reason: format!(
                "expected {} columns, found {}",
                LEDGER_COLUMNS.len(),
                record.len()
            ),
        });
    }

    let date_text = &record[0];
    let date = validate::parse_date(date_text).ok_or_else(|| Error::InvalidRow {
        row,
        reason: format!("{date_text:?} is not a date in the format dd/mm/yyyy"),
    })?;

    let amount_text = &record[1];
    let amount = validate::parse_amount(amount_text).ok_or_else(|| Error::InvalidRow {
        row,
        reason: format!("{amount_text:?} is not a valid amount"),
    })?;

    let category_text = &record[2];
    if category_text.is_empty() {
        return Err(Error::InvalidRow {
            row,
            reason: "the category is empty".to_string(),
        });
    }

    // Categories written by earlier sessions may no longer be configured;
    // they are read back as-is and the statistics engine decides what to do
    // with them.
    let category = CategoryName::new_unchecked(category_text);

    Ok(Transaction::new(date, amount, category, &record[3]))
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use rust_decimal::Decimal;
    use time::macros::date;

    use super::{CsvLedgerStore, LedgerStore};
    use crate::{Error, category::CategoryName, transaction::Transaction};

    fn temp_ledger_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spendtrack_{}_{}.csv", name, std::process::id()))
    }

    fn test_records() -> Vec<Transaction> {
        vec![
            Transaction::new(
                date!(2021 - 01 - 01),
                Decimal::from(12),
                CategoryName::new_unchecked("regular groceries"),
                "test test one",
            ),
            Transaction::new(
                date!(2021 - 03 - 01),
                "123.45".parse().unwrap(),
                CategoryName::new_unchecked("regular groceries"),
                "milk, bread, eggs",
            ),
            Transaction::new(
                date!(2021 - 01 - 05),
                Decimal::from(12),
                CategoryName::new_unchecked("taxi"),
                "",
            ),
        ]
    }

    #[test]
    fn create_writes_only_the_column_header() {
        let path = temp_ledger_path("create");
        let mut store = CsvLedgerStore::new(&path);

        store.create().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "date,amount,category,description\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn appended_records_read_back_unchanged() {
        let path = temp_ledger_path("round_trip");
        let mut store = CsvLedgerStore::new(&path);

        store.create().unwrap();
        store.append(&test_records()).unwrap();

        assert_eq!(store.read_all().unwrap(), test_records());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn append_preserves_existing_rows() {
        let path = temp_ledger_path("append_twice");
        let mut store = CsvLedgerStore::new(&path);
        let records = test_records();

        store.create().unwrap();
        store.append(&records[..2]).unwrap();
        store.append(&records[2..]).unwrap();

        assert_eq!(store.read_all().unwrap(), records);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn read_all_keeps_categories_outside_the_configured_set() {
        let path = temp_ledger_path("stale_category");
        let mut store = CsvLedgerStore::new(&path);
        let record = Transaction::new(
            date!(2020 - 12 - 14),
            Decimal::from(34),
            CategoryName::new_unchecked("groceries"),
            "test 124",
        );

        store.create().unwrap();
        store.append(std::slice::from_ref(&record)).unwrap();

        assert_eq!(store.read_all().unwrap(), vec![record]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn read_all_rejects_an_unexpected_header() {
        let path = temp_ledger_path("bad_header");
        fs::write(&path, "when,how much,what,why\n").unwrap();
        let store = CsvLedgerStore::new(&path);

        let result = store.read_all();

        assert!(matches!(result, Err(Error::InvalidHeader { .. })));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn read_all_reports_the_malformed_row() {
        let path = temp_ledger_path("bad_row");
        fs::write(
            &path,
            "date,amount,category,description\n31/13/2020,12,game,test\n",
        )
        .unwrap();
        let store = CsvLedgerStore::new(&path);

        let result = store.read_all();

        assert!(matches!(result, Err(Error::InvalidRow { row: 2, .. })));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn read_all_fails_when_the_ledger_is_missing() {
        let store = CsvLedgerStore::new(temp_ledger_path("missing"));

        assert!(matches!(store.read_all(), Err(Error::Csv(_))));
    }
}

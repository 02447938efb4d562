//! Spendtrack is an interactive terminal tracker for personal spending.
//!
//! A session collects dated, categorised purchase records through a
//! validated prompt loop, appends them to a CSV ledger, and on request
//! summarises monthly spending as a text report and a line chart.

#![warn(missing_docs)]

mod capture;
mod category;
mod chart;
mod config;
mod console;
mod month;
mod period;
mod report;
mod session;
mod statistics;
mod store;
mod transaction;
mod validate;

pub use capture::collect_transactions;
pub use category::{CategoryName, CategorySet};
pub use chart::{show_chart, spending_chart};
pub use config::{Config, DEFAULT_CATEGORIES};
pub use month::{MonthKey, ParseMonthKeyError};
pub use period::{resolve_request, select_months};
pub use report::format_report;
pub use session::run_session;
pub use statistics::{MonthStatistic, compute_statistics, list_available_months};
pub use store::{CsvLedgerStore, LedgerStore};
pub use transaction::Transaction;
pub use validate::{parse_amount, parse_date, validate_date, validate_price};

/// The errors that may occur in the application.
///
/// Invalid interactive input never shows up here: the capture loop and the
/// period selection flow handle it by re-prompting. These variants cover the
/// conditions that end a session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The interactive input stream ended before the session finished.
    ///
    /// The prompt loops block until they get a recognised answer, so running
    /// out of input (e.g. a closed stdin) cannot be recovered from.
    #[error("the input stream was closed before the session finished")]
    InputClosed,

    /// An empty string was used to create a category name.
    #[error("a category name cannot be an empty string")]
    EmptyCategoryName,

    /// A session was configured without any categories.
    #[error("the configured category list cannot be empty")]
    EmptyCategorySet,

    /// The ledger file does not start with the expected column header.
    ///
    /// The store only understands its own four-column layout; a file with
    /// different columns was most likely not written by this application and
    /// is left untouched.
    #[error("the ledger file has an unexpected header: expected {expected:?}, found {found:?}")]
    InvalidHeader {
        /// The header the store writes when it creates a ledger.
        expected: String,
        /// The header that was actually found in the file.
        found: String,
    },

    /// A ledger row could not be parsed back into a transaction.
    ///
    /// Rows are numbered as in the file, i.e. the first record is row 2
    /// because row 1 holds the column header.
    #[error("ledger row {row} is malformed: {reason}")]
    InvalidRow {
        /// The 1-based row number within the ledger file.
        row: usize,
        /// What was wrong with the row.
        reason: String,
    },

    /// An error occurred while reading from or writing to the terminal, the
    /// ledger file or the chart file.
    #[error("an I/O error occurred: {0}")]
    Io(std::io::Error),

    /// The CSV layer could not read or write the ledger file.
    #[error("could not process the ledger file: {0}")]
    Csv(csv::Error),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}

//! The core purchase record.

use rust_decimal::Decimal;
use time::Date;

use crate::category::CategoryName;

/// A single purchase: when it happened, what it cost, which category it was
/// filed under and a free-form description.
///
/// Transactions are immutable once created and the ledger is append-only, so
/// a record never changes after the capture loop produces it. The capture
/// loop only constructs transactions from inputs that passed validation:
/// a real calendar date, a non-negative amount with at most two fractional
/// digits, and a category from the configured set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// The day the purchase was made.
    pub date: Date,
    /// How much was spent.
    pub amount: Decimal,
    /// The spending category the purchase was filed under.
    ///
    /// For records written by earlier sessions this may name a category
    /// that is no longer configured; the statistics engine counts such
    /// records toward the month total but not toward any category bucket.
    pub category: CategoryName,
    /// A free-form note, may be empty.
    pub description: String,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(date: Date, amount: Decimal, category: CategoryName, description: &str) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.to_string(),
        }
    }
}

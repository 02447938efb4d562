//! Aggregates the ledger into per-month spending statistics.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::{
    category::{CategoryName, CategorySet},
    month::MonthKey,
    transaction::Transaction,
};

/// How many of the highest-amount transactions are reported per month.
const TOP_TRANSACTIONS: usize = 5;

/// The derived spending summary for a single month.
///
/// Statistics are recomputed from the full ledger on every request and
/// discarded after reporting; nothing here is ever persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthStatistic {
    /// The month the statistics cover.
    pub month: MonthKey,
    /// The sum of every transaction amount in the month, including
    /// transactions whose category is no longer configured.
    pub total: Decimal,
    /// The highest-amount transactions of the month in descending order,
    /// at most five. Equal amounts keep their ledger order.
    pub top_transactions: Vec<Transaction>,
    /// The per-category sums in configured category order. Categories with
    /// no transactions in the month appear with a total of zero.
    pub category_totals: Vec<(CategoryName, Decimal)>,
}

/// The distinct months present in the ledger, in calendar order.
///
/// The result is the same regardless of the order the ledger rows are in.
pub fn list_available_months(ledger: &[Transaction]) -> Vec<MonthKey> {
    let months: BTreeSet<MonthKey> = ledger
        .iter()
        .map(|transaction| MonthKey::of(transaction.date))
        .collect();

    months.into_iter().collect()
}

/// Compute a [MonthStatistic] for each month in `requested_months`.
///
/// Statistics are returned in the order the months were requested; callers
/// that want chronological output sort `requested_months` first. A month
/// with no matching transactions yields a zero total, no top transactions
/// and all-zero category totals, which is a valid result rather than an
/// error.
pub fn compute_statistics(
    ledger: &[Transaction],
    categories: &CategorySet,
    requested_months: &[MonthKey],
) -> Vec<MonthStatistic> {
    requested_months
        .iter()
        .map(|&month| month_statistic(ledger, categories, month))
        .collect()
}

fn month_statistic(
    ledger: &[Transaction],
    categories: &CategorySet,
    month: MonthKey,
) -> MonthStatistic {
    let in_month: Vec<&Transaction> = ledger
        .iter()
        .filter(|transaction| MonthKey::of(transaction.date) == month)
        .collect();

    let total = in_month
        .iter()
        .map(|transaction| transaction.amount)
        .sum::<Decimal>();

    let mut category_totals: Vec<(CategoryName, Decimal)> = categories
        .iter()
        .map(|category| (category.clone(), Decimal::ZERO))
        .collect();

    for transaction in &in_month {
        // A category recorded by an earlier session but no longer configured
        // counts toward the month total, just not toward any bucket.
        if let Some((_, bucket)) = category_totals
            .iter_mut()
            .find(|(name, _)| *name == transaction.category)
        {
            *bucket += transaction.amount;
        }
    }

    let mut ranked = in_month;
    // A stable sort keeps ledger order for equal amounts.
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
    ranked.truncate(TOP_TRANSACTIONS);

    MonthStatistic {
        month,
        total,
        top_transactions: ranked.into_iter().cloned().collect(),
        category_totals,
    }
}

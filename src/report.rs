//! Renders month statistics as a human-readable text report.

use time::Date;

use crate::statistics::MonthStatistic;

/// Render a text report for each month statistic, in input order.
///
/// Each month gets its label, the total spent, the ranked top transactions
/// and a line per configured category including those with a zero total.
pub fn format_report(statistics: &[MonthStatistic]) -> String {
    let mut report = String::new();

    for statistic in statistics {
        report.push_str(&format!(
            "\nHere are statistics for {}:\n\nThe total spent: {}\n\nThe highest transactions of the month: \n",
            statistic.month, statistic.total
        ));

        for (position, transaction) in statistic.top_transactions.iter().enumerate() {
            report.push_str(&format!(
                "{}: {}, amount: {}, category: {}, details: {}\n",
                position + 1,
                display_date(transaction.date),
                transaction.amount,
                transaction.category,
                transaction.description
            ));
        }

        report.push_str("\nTotals of each category:\n");

        for (category, total) in &statistic.category_totals {
            report.push_str(&format!("{category}: {total}\n"));
        }
    }

    report
}

/// Dates display as `dd/mm/yy` inside reports, deliberately shorter than the
/// `dd/mm/yyyy` format they are entered in.
fn display_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:02}",
        date.day(),
        u8::from(date.month()),
        date.year().rem_euclid(100)
    )
}

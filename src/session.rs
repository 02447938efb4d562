//! Wires the capture loop, ledger store, statistics, report and chart into
//! one interactive session.

use std::io::{BufRead, Write};

use crate::{
    Error, capture, chart,
    config::Config,
    period, report, statistics,
    store::LedgerStore,
};

/// Run one interactive tracker session.
///
/// The session first captures new purchase records and appends them to the
/// ledger, then reads the full ledger back and offers monthly statistics.
/// Selecting no months, or having an entirely empty ledger, ends the session
/// quietly; the spending chart is only drawn when more than one month was
/// requested.
///
/// # Errors
///
/// This function will return an error if the ledger cannot be read or
/// written, the chart cannot be saved, or the input stream ends mid-session.
/// Invalid interactive input is handled by re-prompting and never surfaces
/// here. A failed append aborts the session without attempting recovery.
pub fn run_session<S, R, W>(
    config: &Config,
    store: &mut S,
    input: &mut R,
    output: &mut W,
) -> Result<(), Error>
where
    S: LedgerStore,
    R: BufRead,
    W: Write,
{
    let new_records = capture::collect_transactions(input, output, &config.categories)?;
    if !new_records.is_empty() {
        store.append(&new_records)?;
        tracing::info!("appended {} new records to the ledger", new_records.len());
    }

    let ledger = store.read_all()?;
    tracing::debug!("the ledger holds {} transactions", ledger.len());

    let available = statistics::list_available_months(&ledger);
    if available.is_empty() {
        writeln!(output, "There are no recorded purchases to summarise yet.")?;
        return Ok(());
    }

    let months = period::select_months(input, output, &available)?;
    if months.is_empty() {
        return Ok(());
    }

    let stats = statistics::compute_statistics(&ledger, &config.categories, &months);
    write!(output, "{}", report::format_report(&stats))?;

    if stats.len() > 1 {
        let spending = chart::spending_chart(&config.categories, &stats);
        chart::show_chart(&spending, &config.chart_path)?;
        writeln!(
            output,
            "The spending chart was saved to {}",
            config.chart_path.display()
        )?;
    }

    Ok(())
}

//! Lets the user pick which of the available months to summarise.

use std::io::{BufRead, Write};

use crate::{
    Error,
    console::{ask_question, prompt},
    month::MonthKey,
};

/// Parse a whitespace-separated list of month tokens against the months
/// actually present in the ledger.
///
/// Returns the accepted months, deduplicated and sorted chronologically,
/// alongside the rejected tokens in input order. A token is rejected when it
/// is not a `mm/yy` month at all or when the ledger has no transactions for
/// it; one bad token never discards the rest of the request.
pub fn resolve_request(available: &[MonthKey], input: &str) -> (Vec<MonthKey>, Vec<String>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for token in input.split_whitespace() {
        match token.parse::<MonthKey>() {
            Ok(month) if available.contains(&month) => accepted.push(month),
            _ => rejected.push(token.to_string()),
        }
    }

    accepted.sort();
    accepted.dedup();

    (accepted, rejected)
}

/// Interactively choose the months to summarise.
///
/// The user is first asked whether they want statistics at all. If they do,
/// the available months are listed and month tokens are read; every
/// unrecognised token is reported individually. A round that yields nothing
/// valid is re-asked, and after a successful round the user may keep adding
/// months. Declining up front, or submitting an empty line before anything
/// was accepted, returns an empty list; the caller is expected to skip the
/// report and chart in that case.
///
/// The returned months are deduplicated and sorted chronologically.
///
/// # Errors
///
/// This function will return an error only if the terminal itself fails or
/// the input stream ends mid-selection.
pub fn select_months<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    available: &[MonthKey],
) -> Result<Vec<MonthKey>, Error> {
    if !ask_question(
        input,
        output,
        "Would you like to see monthly statistics? yes/no",
    )? {
        return Ok(Vec::new());
    }

    let options = available
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(output, "Statistics are available for these months: {options}")?;

    let mut selected: Vec<MonthKey> = Vec::new();

    loop {
        let line = prompt(
            input,
            output,
            "Which months would you like? List them like this: 09/20 10/20",
        )?;

        let (accepted, rejected) = resolve_request(available, &line);
        for token in &rejected {
            writeln!(output, "{token} is not one of the available months")?;
        }
        selected.extend(accepted);

        if selected.is_empty() {
            if line.trim().is_empty() {
                // An empty response means the user changed their mind.
                return Ok(Vec::new());
            }
            continue;
        }

        if !ask_question(input, output, "Would you like to add more months? yes/no")? {
            break;
        }
    }

    selected.sort();
    selected.dedup();

    Ok(selected)
}

//! The interactive loop that captures validated purchase records.
//!
//! The loop is an explicit state machine: each input field is a state with
//! its own prompt, validator and error message. Invalid input re-enters the
//! same state, so fields that were already accepted are never discarded.
//! States carry the fields accepted so far, which means a transaction can
//! only be assembled once every field has passed validation.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use time::Date;

use crate::{
    Error,
    category::{CategoryName, CategorySet},
    console::{ask_question, prompt},
    transaction::Transaction,
    validate,
};

/// The input the capture loop is currently blocked on, together with the
/// fields of the record accepted so far.
enum CaptureState {
    /// Asking whether the user wants to record a purchase.
    Confirm,
    /// Waiting for the purchase date.
    AwaitingDate,
    /// Waiting for the amount.
    AwaitingAmount {
        date: Date,
    },
    /// Waiting for a category chosen by its 1-based list position.
    AwaitingCategory {
        date: Date,
        amount: Decimal,
    },
    /// Waiting for the free-form description.
    AwaitingDescription {
        date: Date,
        amount: Decimal,
        category: CategoryName,
    },
}

/// Interactively collect purchase records until the user stops.
///
/// Records are returned in the order they were completed. Answering "no" to
/// the very first question returns an empty list, which is a perfectly valid
/// session.
///
/// The category is chosen by its 1-based position in `categories`; that
/// positional mapping is purely a presentation concern and stays inside this
/// function, the returned transactions carry category values.
///
/// # Errors
///
/// This function will return an error only if the terminal itself fails
/// ([Error::Io]) or the input stream ends mid-session ([Error::InputClosed]).
/// Invalid answers are handled by re-prompting and never abort the loop.
pub fn collect_transactions<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    categories: &CategorySet,
) -> Result<Vec<Transaction>, Error> {
    let mut records = Vec::new();
    let mut state = CaptureState::Confirm;

    loop {
        state = match state {
            CaptureState::Confirm => {
                if ask_question(input, output, "Would you like to add a purchase? yes/no")? {
                    CaptureState::AwaitingDate
                } else {
                    return Ok(records);
                }
            }
            CaptureState::AwaitingDate => {
                let text = prompt(
                    input,
                    output,
                    "What's the date of this purchase? Please use the format dd/mm/yyyy",
                )?;

                match validate::parse_date(text.trim()) {
                    Some(date) => CaptureState::AwaitingAmount { date },
                    None => {
                        writeln!(output, "Incorrect date format, should be dd/mm/yyyy")?;
                        CaptureState::AwaitingDate
                    }
                }
            }
            CaptureState::AwaitingAmount { date } => {
                let text = prompt(input, output, "What's the amount?")?;

                match validate::parse_amount(text.trim()) {
                    Some(amount) => CaptureState::AwaitingCategory { date, amount },
                    None => {
                        writeln!(
                            output,
                            "Please give just the number, with at most two decimal places"
                        )?;
                        CaptureState::AwaitingAmount { date }
                    }
                }
            }
            CaptureState::AwaitingCategory { date, amount } => {
                for (position, category) in categories.iter().enumerate() {
                    writeln!(output, "{} {category}", position + 1)?;
                }

                let text = prompt(input, output, "Choose the category by writing its number")?;
                let choice = text
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|position| categories.get(position));

                match choice {
                    Some(category) => CaptureState::AwaitingDescription {
                        date,
                        amount,
                        category: category.clone(),
                    },
                    None => {
                        writeln!(output, "Please choose one of the available numbers")?;
                        CaptureState::AwaitingCategory { date, amount }
                    }
                }
            }
            CaptureState::AwaitingDescription {
                date,
                amount,
                category,
            } => {
                let description =
                    prompt(input, output, "Add a short description for this purchase")?;

                records.push(Transaction::new(date, amount, category, &description));
                tracing::debug!("captured a purchase dated {date} for {amount}");

                CaptureState::Confirm
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rust_decimal::Decimal;
    use time::macros::date;

    use super::collect_transactions;
    use crate::{category::CategorySet, transaction::Transaction};

    fn test_categories() -> CategorySet {
        CategorySet::new(&["baby", "regular groceries", "game", "car related", "taxi"]).unwrap()
    }

    fn run_capture(script: &str) -> Vec<Transaction> {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();

        collect_transactions(&mut input, &mut output, &test_categories()).unwrap()
    }

    #[test]
    fn captures_a_single_record() {
        let records = run_capture("yes\n10/12/2020\n123\n2\nZelda rules\nno\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, date!(2020 - 12 - 10));
        assert_eq!(records[0].amount, Decimal::from(123));
        assert_eq!(records[0].category.as_ref(), "regular groceries");
        assert_eq!(records[0].description, "Zelda rules");
    }

    #[test]
    fn declining_immediately_returns_no_records() {
        assert!(run_capture("no\n").is_empty());
    }

    #[test]
    fn reprompts_each_field_until_valid() {
        // Two bad dates, a non-numeric amount and an out-of-range category
        // before each field finally passes.
        let records = run_capture(
            "yes\n10/13/2020\n2021/12/03\n10/12/2019\none hundred\n100\n6\n4\n2 packages of diapers\nno\n",
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, date!(2019 - 12 - 10));
        assert_eq!(records[0].amount, Decimal::from(100));
        assert_eq!(records[0].category.as_ref(), "car related");
        assert_eq!(records[0].description, "2 packages of diapers");
    }

    #[test]
    fn captures_multiple_records_in_order() {
        let records = run_capture(
            "yes\n10/01/2021\n100.99\n3\nfuel\n\
             yes\n12/01/2021\n23.88\n2\nMario\n\
             yes\n14/01/2021\n455\n1\nAuchan\nno\n",
        );

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].amount.to_string(), "100.99");
        assert_eq!(records[0].category.as_ref(), "game");
        assert_eq!(records[1].amount.to_string(), "23.88");
        assert_eq!(records[1].category.as_ref(), "regular groceries");
        assert_eq!(records[2].amount, Decimal::from(455));
        assert_eq!(records[2].category.as_ref(), "baby");
    }

    #[test]
    fn unrecognised_continuation_answer_reasks_without_losing_records() {
        let records = run_capture("yes\n10/12/2020\n123\n2\nZelda rules\nmaybe\nno\n");

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_description_is_allowed() {
        let records = run_capture("yes\n10/12/2020\n123\n2\n\nno\n");

        assert_eq!(records[0].description, "");
    }
}

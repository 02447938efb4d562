//! Validators and parsers for the date and amount tokens the user types in.

use rust_decimal::Decimal;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The strict `dd/mm/yyyy` format transaction dates must be entered in.
pub(crate) const INPUT_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day]/[month]/[year]");

/// Parse a date in the strict `dd/mm/yyyy` input format.
///
/// Returns `None` for any other layout and for calendrically invalid dates
/// such as `31/04/2021`.
pub fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text, INPUT_DATE_FORMAT).ok()
}

/// Whether `text` is a real calendar date in the `dd/mm/yyyy` input format.
pub fn validate_date(text: &str) -> bool {
    parse_date(text).is_some()
}

/// Parse a non-negative monetary amount.
///
/// Accepts a non-negative integer, or a non-negative decimal with exactly
/// two fractional digits. The whole string must match: negative values,
/// one or three fractional digits, multiple decimal points and any
/// non-numeric text are all rejected.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let well_formed = match text.split_once('.') {
        None => !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit()),
        Some((whole, fraction)) => {
            !whole.is_empty()
                && whole.bytes().all(|byte| byte.is_ascii_digit())
                && fraction.len() == 2
                && fraction.bytes().all(|byte| byte.is_ascii_digit())
        }
    };

    if well_formed { text.parse().ok() } else { None }
}

/// Whether `text` is a valid monetary amount.
pub fn validate_price(text: &str) -> bool {
    parse_amount(text).is_some()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{parse_amount, parse_date, validate_date, validate_price};

    #[test]
    fn accepts_day_month_year_dates() {
        assert!(validate_date("12/12/2020"));
        assert_eq!(parse_date("13/09/2020"), Some(date!(2020 - 09 - 13)));
    }

    #[test]
    fn rejects_other_date_layouts() {
        assert!(!validate_date("2021/06/22"));
        assert!(!validate_date("test"));
        assert!(!validate_date("12-12-2020"));
        assert!(!validate_date(""));
    }

    #[test]
    fn rejects_calendrically_invalid_dates() {
        assert!(!validate_date("31/04/2021"));
        assert!(!validate_date("10/13/2020"));
        assert!(!validate_date("29/02/2021"));
        assert!(validate_date("29/02/2020"));
    }

    #[test]
    fn accepts_integers_and_two_decimal_amounts() {
        assert!(validate_price("20"));
        assert!(validate_price("29.99"));
        assert!(validate_price("0"));
        assert!(validate_price("0.00"));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert!(!validate_price("yo"));
        assert!(!validate_price("123.23.34"));
        assert!(!validate_price("-5"));
        assert!(!validate_price("12.3"));
        assert!(!validate_price("12.345"));
        assert!(!validate_price("12."));
        assert!(!validate_price(".99"));
        assert!(!validate_price(""));
        assert!(!validate_price("12 "));
    }

    #[test]
    fn parsed_amounts_keep_their_two_digit_precision() {
        let amount = parse_amount("100.99").unwrap();

        assert_eq!(amount.to_string(), "100.99");
    }
}

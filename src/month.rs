//! The month + year key used to group transactions for statistics.

use std::{fmt::Display, str::FromStr};

use time::Date;

/// A month and year grouping key, displayed as `mm/yy` (e.g. `09/20` for
/// September 2020).
///
/// Ordering is calendar order, so `01/21` sorts after `12/20` even though it
/// compares lower as a string. Two-digit years in user input are resolved to
/// the years 2000 through 2099.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u8,
}

impl MonthKey {
    /// The key for the month that `date` falls in.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

/// The error returned when a string is not a `mm/yy` month key.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("a month must be in the format mm/yy, e.g. 09/20")]
pub struct ParseMonthKeyError;

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (month_text, year_text) = text.split_once('/').ok_or(ParseMonthKeyError)?;

        if month_text.len() != 2 || year_text.len() != 2 {
            return Err(ParseMonthKeyError);
        }

        let month: u8 = month_text.parse().map_err(|_| ParseMonthKeyError)?;
        let year: i32 = year_text.parse().map_err(|_| ParseMonthKeyError)?;

        if !(1..=12).contains(&month) {
            return Err(ParseMonthKeyError);
        }

        Ok(Self {
            year: 2000 + year,
            month,
        })
    }
}

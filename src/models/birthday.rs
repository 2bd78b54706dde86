//! Birthday value object
//!
//! Birthdays are entered and displayed as `DD.MM.YYYY`. Parsing is strict:
//! the date must exist in the calendar.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::{ContactError, ContactResult, Field};

/// Input and display format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidValue` if the input is not a real
    /// calendar date in that format (e.g. `31.02.2020`).
    pub fn new(value: &str) -> ContactResult<Self> {
        let value = value.trim();
        if !Self::has_expected_shape(value) {
            return Err(ContactError::invalid(Field::Birthday, value));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ContactError::invalid(Field::Birthday, value))
    }

    /// `DD.MM.YYYY`: two-digit day and month, four-digit year
    fn has_expected_shape(value: &str) -> bool {
        let parts: Vec<&str> = value.split('.').collect();
        matches!(parts.as_slice(), [d, m, y]
            if d.len() == 2 && m.len() == 2 && y.len() == 4
                && [d, m, y].iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())))
    }

    /// The date of birth
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date the birthday is observed in the given year
    ///
    /// 29 February falls back to 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day() - 1))
    }

    /// Format the birthday with a strftime pattern
    pub fn format(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

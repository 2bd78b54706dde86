//! Phone number value object

use std::fmt;
use std::str::FromStr;

use crate::error::{ContactError, ContactResult, Field};

/// Number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// A phone number made of exactly ten ASCII digits
///
/// The value is validated once at construction; a `Phone` that exists is
/// always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new phone number, validating the format
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidValue` unless the input is exactly ten
    /// ASCII digits.
    pub fn new(number: impl Into<String>) -> ContactResult<Self> {
        let number = number.into();
        if !Self::is_valid(&number) {
            return Err(ContactError::invalid(Field::Phone, number));
        }
        Ok(Self(number))
    }

    /// Check a candidate string against the phone format
    pub fn is_valid(number: &str) -> bool {
        number.len() == PHONE_DIGITS && number.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

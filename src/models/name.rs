//! Contact name value object

use std::fmt;
use std::str::FromStr;

use crate::error::{ContactError, ContactResult, Field};

/// A contact's name, used as the key of the address book
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new name
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidValue` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> ContactResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ContactError::invalid(Field::Name, name));
        }
        Ok(Self(name))
    }

    /// Whether the name is made of letters and spaces only
    pub fn is_alphabetic(&self) -> bool {
        self.0.chars().all(|c| c.is_alphabetic() || c == ' ')
            && self.0.chars().any(char::is_alphabetic)
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

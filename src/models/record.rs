//! Contact record model
//!
//! A record owns one name, an ordered list of unique phone numbers, and an
//! optional birthday. Phone lookups by a raw string never fail: an unknown
//! number is reported as `None` and the caller decides how to tell the user.

use std::fmt;

use super::birthday::Birthday;
use super::name::Name;
use super::phone::Phone;
use crate::error::ContactResult;

/// One contact's stored data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record from a raw name
    pub fn with_name(name: &str) -> ContactResult<Self> {
        Ok(Self::new(Name::new(name)?))
    }

    /// The contact's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number
    ///
    /// Returns `Ok(false)` if the number was already present; the list is left
    /// unchanged in that case.
    pub fn add_phone(&mut self, number: &str) -> ContactResult<bool> {
        let phone = Phone::new(number)?;
        if self.phones.contains(&phone) {
            return Ok(false);
        }
        self.phones.push(phone);
        Ok(true)
    }

    /// Remove a phone number, returning it if it was present
    pub fn remove_phone(&mut self, number: &str) -> Option<Phone> {
        let index = self.position(number)?;
        Some(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`
    ///
    /// `new` is validated before anything is touched. Returns the replaced
    /// phone, or `None` if `old` is not on the record. If `new` is already on
    /// the record the `old` entry is dropped so numbers stay unique.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<Option<Phone>> {
        let new = Phone::new(new)?;
        let Some(index) = self.position(old) else {
            return Ok(None);
        };

        if self.phones[index] != new && self.phones.contains(&new) {
            return Ok(Some(self.phones.remove(index)));
        }

        Ok(Some(std::mem::replace(&mut self.phones[index], new)))
    }

    /// Find a phone by its number
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| **phone == *number)
    }

    /// Set or overwrite the birthday
    pub fn add_birthday(&mut self, date: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    /// `Contact name: <name>, phones: <p1>; <p2>`, without the birthday
    pub fn phones_line(&self) -> String {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        format!("Contact name: {}, phones: {}", self.name, phones.join("; "))
    }

    fn position(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| *phone == *number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phones_line())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::with_name("John").unwrap()
    }

    fn numbers(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_new_record() {
        let record = record();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_is_idempotent() {
        let mut record = record();
        assert!(record.add_phone("1234567890").unwrap());
        assert!(!record.add_phone("1234567890").unwrap());
        assert_eq!(numbers(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_add_phone_preserves_order() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(numbers(&record), vec!["1234567890", "0987654321"]);
    }

    #[test]
    fn test_add_invalid_phone() {
        let mut record = record();
        assert!(record.add_phone("12345").unwrap_err().is_invalid_value());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();

        let removed = record.remove_phone("1234567890").unwrap();
        assert_eq!(removed.as_str(), "1234567890");
        assert!(record.phones().is_empty());
        assert!(record.remove_phone("1234567890").is_none());
    }

    #[test]
    fn test_edit_phone() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();

        let old = record.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(old.unwrap().as_str(), "1234567890");
        assert_eq!(numbers(&record), vec!["1112223333", "0987654321"]);
    }

    #[test]
    fn test_edit_missing_phone_leaves_phones_unchanged() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();

        assert!(record.edit_phone("5555555555", "1112223333").unwrap().is_none());
        assert_eq!(numbers(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_edit_phone_validates_new_number() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("1234567890", "bad").unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(numbers(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_edit_phone_onto_existing_number_stays_unique() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();

        record.edit_phone("1234567890", "0987654321").unwrap();
        assert_eq!(numbers(&record), vec!["0987654321"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();

        assert_eq!(record.find_phone("1234567890").unwrap().as_str(), "1234567890");
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = record();
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");

        assert!(record.add_birthday("31.02.2020").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn test_display() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 0987654321"
        );

        record.add_birthday("15.03.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 0987654321, birthday: 15.03.1990"
        );
    }

    #[test]
    fn test_phones_line_omits_birthday() {
        let mut record = record();
        record.add_phone("0987654321").unwrap();
        record.add_birthday("01.02.1990").unwrap();

        assert_eq!(record.phones_line(), "Contact name: John, phones: 0987654321");
        assert!(record.to_string().starts_with(&record.phones_line()));
    }
}

//! Contact service
//!
//! Command-level operations layered over the address book: input checks that
//! only make sense at the prompt (letters-only names, "old phone must exist")
//! live here, not on the record.

use chrono::NaiveDate;
use tracing::debug;

use crate::book::AddressBook;
use crate::error::{ContactError, ContactResult, Field};
use crate::models::{Birthday, Name, Phone, Record};

/// What `add_contact` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created
    Added,
    /// The phone was added to an existing record
    Updated,
}

/// Service for contact management
pub struct ContactService<'a> {
    book: &'a mut AddressBook,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    /// Add a contact, or a phone to an existing contact
    ///
    /// The name must be letters and spaces only and the phone ten digits.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> ContactResult<AddOutcome> {
        let name = Name::new(name)?;
        if !name.is_alphabetic() {
            return Err(ContactError::invalid(Field::Name, name.as_str()));
        }
        let phone = Phone::new(phone)?;

        let outcome = if self.book.find(name.as_str()).is_some() {
            AddOutcome::Updated
        } else {
            self.book.add_record(Record::new(name.clone()));
            AddOutcome::Added
        };

        let record = self.record_mut(name.as_str())?;
        let appended = record.add_phone(phone.as_str())?;

        debug!(name = %name, phone = %phone, appended, ?outcome, "contact saved");
        Ok(outcome)
    }

    /// Replace one of a contact's phones
    ///
    /// # Errors
    ///
    /// `NotFound` if the contact or its old phone is missing, `InvalidValue`
    /// if the new phone is malformed.
    pub fn change_contact(&mut self, name: &str, old: &str, new: &str) -> ContactResult<()> {
        let record = self.record_mut(name)?;
        if record.find_phone(old).is_none() {
            return Err(ContactError::phone_not_found(old));
        }

        record
            .edit_phone(old, new)?
            .ok_or_else(|| ContactError::phone_not_found(old))?;

        debug!(name, old, new, "phone changed");
        Ok(())
    }

    /// Look up a contact to show its phones
    pub fn show_phone(&self, name: &str) -> ContactResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| ContactError::contact_not_found(name))
    }

    /// All contacts, sorted by name
    pub fn all(&self) -> Vec<&Record> {
        self.book.records()
    }

    /// Set a contact's birthday
    pub fn add_birthday(&mut self, name: &str, date: &str) -> ContactResult<()> {
        let record = self.record_mut(name)?;
        record.add_birthday(date)?;

        debug!(name, date, "birthday set");
        Ok(())
    }

    /// A contact's birthday, if one is set
    pub fn show_birthday(&self, name: &str) -> ContactResult<Option<&Birthday>> {
        Ok(self.show_phone(name)?.birthday())
    }

    /// Contacts with a birthday in the week containing `today`, sorted by name
    pub fn birthdays(&self, today: NaiveDate) -> Vec<&Record> {
        let mut records = self.book.upcoming_birthdays_at(today);
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records
    }

    /// Remove a phone from a contact
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactResult<Phone> {
        let removed = self
            .record_mut(name)?
            .remove_phone(phone)
            .ok_or_else(|| ContactError::phone_not_found(phone))?;

        debug!(name, phone, "phone removed");
        Ok(removed)
    }

    /// Delete a contact entirely
    pub fn delete_contact(&mut self, name: &str) -> ContactResult<Record> {
        let removed = self.book.delete(name)?;
        debug!(name, "contact deleted");
        Ok(removed)
    }

    fn record_mut(&mut self, name: &str) -> ContactResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| ContactError::contact_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(book: &AddressBook, name: &str) -> Vec<String> {
        book.find(name)
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn test_scenario_add_add_change() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        assert_eq!(
            service.add_contact("John", "1234567890").unwrap(),
            AddOutcome::Added
        );
        assert_eq!(
            service.add_contact("John", "0987654321").unwrap(),
            AddOutcome::Updated
        );
        service
            .change_contact("John", "1234567890", "1112223333")
            .unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(numbers(&book, "John"), vec!["1112223333", "0987654321"]);
    }

    #[test]
    fn test_add_contact_validation() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        let err = service.add_contact("J0hn", "1234567890").unwrap_err();
        assert_eq!(err.field(), Some(Field::Name));

        let err = service.add_contact("John", "12345").unwrap_err();
        assert_eq!(err.field(), Some(Field::Phone));

        // Nothing is created when validation fails
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_same_phone_twice() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);
        service.add_contact("John", "1234567890").unwrap();
        service.add_contact("John", "1234567890").unwrap();

        assert_eq!(numbers(&book, "John"), vec!["1234567890"]);
    }

    #[test]
    fn test_change_contact_errors() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        let err = service
            .change_contact("John", "1234567890", "1112223333")
            .unwrap_err();
        assert_eq!(err, ContactError::contact_not_found("John"));

        service.add_contact("John", "1234567890").unwrap();
        let err = service
            .change_contact("John", "5555555555", "1112223333")
            .unwrap_err();
        assert_eq!(err, ContactError::phone_not_found("5555555555"));

        let err = service
            .change_contact("John", "1234567890", "111")
            .unwrap_err();
        assert!(err.is_invalid_value());

        assert_eq!(numbers(&book, "John"), vec!["1234567890"]);
    }

    #[test]
    fn test_birthday_operations() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);
        service.add_contact("John", "1234567890").unwrap();

        assert!(service.show_birthday("John").unwrap().is_none());
        service.add_birthday("John", "14.10.1990").unwrap();
        assert_eq!(
            service.show_birthday("John").unwrap().unwrap().to_string(),
            "14.10.1990"
        );

        assert!(service.add_birthday("John", "31.02.2020").unwrap_err().is_invalid_value());
        assert!(service.add_birthday("Jane", "14.10.1990").unwrap_err().is_not_found());
        assert!(service.show_birthday("Jane").unwrap_err().is_not_found());

        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let upcoming = service.birthdays(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name().as_str(), "John");
    }

    #[test]
    fn test_remove_phone() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);
        service.add_contact("John", "1234567890").unwrap();

        let removed = service.remove_phone("John", "1234567890").unwrap();
        assert_eq!(removed.as_str(), "1234567890");
        assert!(service.remove_phone("John", "1234567890").unwrap_err().is_not_found());
        assert!(service.remove_phone("Jane", "1234567890").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_contact() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);
        service.add_contact("John", "1234567890").unwrap();

        service.delete_contact("John").unwrap();
        assert!(service.show_phone("John").unwrap_err().is_not_found());
        assert!(service.delete_contact("John").unwrap_err().is_not_found());
    }
}

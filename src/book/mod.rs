//! In-memory address book
//!
//! Owns every contact record, keyed by the record's name. Only the operations
//! the application needs are exposed; the underlying map is private so the
//! key/name invariant cannot be broken from outside.

mod week;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{ContactError, ContactResult};
use crate::models::Record;

pub use week::{birthday_in_week, iso_week_dates};

/// The contact store
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    ///
    /// Returns the replaced record, phones and birthday included.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record)
    }

    /// Find a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Find a record by exact name for mutation
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Delete a record by name
    ///
    /// # Errors
    ///
    /// Returns `ContactError::NotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| ContactError::contact_not_found(name))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, sorted by name
    pub fn records(&self) -> Vec<&Record> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records
    }

    /// Records whose birthday falls in the current ISO week
    pub fn upcoming_birthdays(&self) -> Vec<&Record> {
        self.upcoming_birthdays_at(chrono::Local::now().date_naive())
    }

    /// Records whose birthday falls in the ISO week containing `today`
    ///
    /// Only the day and month of the birthday are compared; the birth year is
    /// irrelevant. Records without a birthday are never included. Results
    /// follow store iteration order.
    pub fn upcoming_birthdays_at(&self, today: NaiveDate) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| {
                record
                    .birthday()
                    .is_some_and(|birthday| birthday_in_week(birthday, today))
            })
            .collect()
    }
}

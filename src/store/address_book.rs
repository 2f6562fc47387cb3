//! In-memory address book keyed by contact name.

use super::birthdays::{self, UpcomingBirthdays};
use crate::models::ContactRecord;
use chrono::NaiveDate;

/// The collection of all contacts for a session.
///
/// Names are unique: adding a record under an existing name replaces the old
/// record in place. Iteration follows insertion order so listings are
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any record with the same name.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position_of(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(name = %record.name(), "Overwriting existing contact");
                self.records[index] = record;
            }
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|record| record.name().as_str() == name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records
            .iter_mut()
            .find(|record| record.name().as_str() == name)
    }

    /// Remove the record stored under `name`, returning it if it existed.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        self.position_of(name).map(|index| self.records.remove(index))
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts with a birthday in `[today, today + window_days)`, grouped by weekday.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> UpcomingBirthdays {
        birthdays::upcoming_birthdays(&self.records, today, window_days)
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

//! Test fixtures and sample data for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_book::{AddressBook, ContactRecord};

/// Build a record with the given phones and optional birthday.
///
/// Panics on invalid input; fixtures are expected to be valid.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> ContactRecord {
    let mut record = ContactRecord::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(raw) = birthday {
        record.add_birthday(raw).unwrap();
    }
    record
}

/// An address book holding the given records, in order.
pub fn sample_book(records: Vec<ContactRecord>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}

/// Shorthand for a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Turn string literals into handler arguments.
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

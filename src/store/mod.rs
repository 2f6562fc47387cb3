//! Contact storage.
//!
//! The address book owns every record for the session; the birthday window
//! query runs over its records in insertion order.

pub mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::{
    next_occurrence, BirthdayGroup, UpcomingBirthdays, DEFAULT_WINDOW_DAYS,
};

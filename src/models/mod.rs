//! Data models for the address book.
//!
//! A contact record aggregates the validated domain values that belong to one
//! person.

pub mod record;

pub use record::ContactRecord;

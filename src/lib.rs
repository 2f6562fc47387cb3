//! Contact Book - an interactive assistant bot for contacts and birthdays.
//!
//! Contacts live in memory for the length of a session. Each contact has a
//! name, any number of ten-digit phone numbers and an optional birthday; the
//! bot can list whose birthday falls in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record built from those values
//! - **store**: The address book and the upcoming-birthdays query
//! - **bot**: Command handlers, input parsing and the read-eval-print loop
//! - **error**: Error types and their user-facing messages
//! - **config**: Configuration from environment variables

pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod store;

pub use bot::AssistantBot;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::ContactRecord;
pub use store::{AddressBook, UpcomingBirthdays};

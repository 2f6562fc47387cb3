//! Command handlers for the assistant bot.
//!
//! Each handler takes the arguments that followed the command word and
//! returns the reply to print. Failures never escape: they are turned into
//! the fixed user-facing messages by [`CommandError::user_message`].

use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::models::ContactRecord;
use crate::store::{AddressBook, DEFAULT_WINDOW_DAYS};
use chrono::{Local, NaiveDate};

/// The assistant bot: owns the address book for the session.
#[derive(Debug, Clone)]
pub struct AssistantBot {
    book: AddressBook,
    birthday_window_days: u32,
}

impl Default for AssistantBot {
    fn default() -> Self {
        Self::with_book(AddressBook::new(), DEFAULT_WINDOW_DAYS)
    }
}

impl AssistantBot {
    /// Create a bot with an empty address book.
    pub fn new(config: &Config) -> Self {
        Self::with_book(AddressBook::new(), config.birthday_window_days)
    }

    /// Create a bot around an existing address book.
    pub fn with_book(book: AddressBook, birthday_window_days: u32) -> Self {
        Self {
            book,
            birthday_window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// `add <name> <phone>`: create a contact, replacing any with the same name.
    pub fn add_contact(&mut self, args: &[String]) -> String {
        respond("add", self.try_add_contact(args))
    }

    /// `change <name> <old phone> <new phone>`
    pub fn change_contact(&mut self, args: &[String]) -> String {
        respond("change", self.try_change_contact(args))
    }

    /// `phone <name>`
    pub fn show_phone(&self, args: &[String]) -> String {
        respond("phone", self.try_show_phone(args))
    }

    /// `all`
    pub fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts found.".to_string();
        }

        self.book
            .records()
            .map(ContactRecord::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `add-birthday <name> <DD.MM.YYYY>`
    pub fn add_birthday(&mut self, args: &[String]) -> String {
        respond("add-birthday", self.try_add_birthday(args))
    }

    /// `show-birthday <name>`
    pub fn show_birthday(&self, args: &[String]) -> String {
        respond("show-birthday", self.try_show_birthday(args))
    }

    /// `birthdays`, relative to the local date.
    pub fn list_upcoming_birthdays(&self) -> String {
        self.list_upcoming_birthdays_on(Local::now().date_naive())
    }

    /// `birthdays`, relative to `today`.
    pub fn list_upcoming_birthdays_on(&self, today: NaiveDate) -> String {
        let upcoming = self
            .book
            .upcoming_birthdays(today, self.birthday_window_days);

        if upcoming.is_empty() {
            return "No upcoming birthdays.".to_string();
        }

        let mut lines = vec!["Upcoming birthdays:".to_string()];
        lines.extend(
            upcoming
                .groups()
                .iter()
                .map(|group| format!("{}: {}", group.day_name(), group.names.join(", "))),
        );
        lines.join("\n")
    }

    /// `delete <name>`
    pub fn delete_contact(&mut self, args: &[String]) -> String {
        respond("delete", self.try_delete_contact(args))
    }

    fn try_add_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone] = exact_args::<2>(args)?;

        let mut record = ContactRecord::new(name)?;
        record.add_phone(phone)?;
        self.book.add_record(record);

        tracing::info!(name, "Contact added");
        Ok("Contact added.".to_string())
    }

    fn try_change_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, old_phone, new_phone] = exact_args::<3>(args)?;

        let record = self.find_mut(name)?;
        if !record.edit_phone(old_phone, new_phone)? {
            tracing::debug!(name, old_phone, "Phone not on record, nothing changed");
        }

        Ok("Contact updated.".to_string())
    }

    fn try_show_phone(&self, args: &[String]) -> CommandResult<String> {
        let name = first_arg(args)?;
        Ok(self.find(name)?.phones_display())
    }

    fn try_add_birthday(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, birthday] = exact_args::<2>(args)?;

        self.find_mut(name)?.add_birthday(birthday)?;

        tracing::info!(name, "Birthday added");
        Ok("Birthday added.".to_string())
    }

    fn try_show_birthday(&self, args: &[String]) -> CommandResult<String> {
        let name = first_arg(args)?;

        Ok(match self.find(name)?.birthday() {
            Some(birthday) => format!("{}'s birthday is on {}", name, birthday),
            None => format!("{} has no birthday set.", name),
        })
    }

    fn try_delete_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let name = first_arg(args)?;

        self.book
            .delete(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

        tracing::info!(name, "Contact deleted");
        Ok("Contact deleted.".to_string())
    }

    fn find(&self, name: &str) -> CommandResult<&ContactRecord> {
        self.book
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn find_mut(&mut self, name: &str) -> CommandResult<&mut ContactRecord> {
        self.book
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }
}

/// Turn a handler result into the reply line.
fn respond(command: &str, result: CommandResult<String>) -> String {
    result.unwrap_or_else(|e| {
        tracing::warn!(command, error = %e, "Command failed");
        e.user_message().to_string()
    })
}

/// Require exactly `N` arguments.
fn exact_args<const N: usize>(args: &[String]) -> CommandResult<[&str; N]> {
    if args.len() != N {
        return Err(CommandError::WrongArgumentCount {
            expected: N,
            actual: args.len(),
        });
    }

    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// Require at least one argument; extras are ignored.
fn first_arg(args: &[String]) -> CommandResult<&str> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument("name"))
}

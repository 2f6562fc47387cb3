//! Contact record: one person with their phones and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at creation and is the key the record is stored under.
/// Phones keep insertion order and may repeat; the birthday is optional and
/// setting it again overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with a name and no phones or birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// The record is left untouched if validation fails.
    pub fn add_phone(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(self)
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// Returns `true` if a phone was removed. Absent phones are not an error.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.position_of(raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`.
    ///
    /// `new_raw` is validated before anything is touched. When `old_raw` is not
    /// on the record nothing changes and `Ok(false)` is returned.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<bool, ValidationError> {
        let replacement = PhoneNumber::new(new_raw)?;

        match self.position_of(old_raw) {
            Some(index) => {
                self.phones[index] = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Find the first phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == raw)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(self)
    }

    /// Phones joined the way they are displayed: `"p1; p2"`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone == raw)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )?;

        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones(record: &ContactRecord) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_record_new() {
        let record = ContactRecord::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_new_empty_name_fails() {
        assert_eq!(ContactRecord::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        assert_eq!(phones(&record), vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();

        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
        assert_eq!(phones(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        assert!(record.remove_phone("1111111111"));
        assert_eq!(phones(&record), vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();

        assert!(!record.remove_phone("9999999999"));
        assert_eq!(phones(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("3333333333").unwrap();

        assert_eq!(record.edit_phone("2222222222", "4444444444"), Ok(true));
        assert_eq!(phones(&record), vec!["1111111111", "4444444444", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_missing_old_is_noop() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();

        assert_eq!(record.edit_phone("9999999999", "4444444444"), Ok(false));
        assert_eq!(phones(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_fails_without_change() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();

        assert!(record.edit_phone("1111111111", "bad").is_err());
        assert_eq!(phones(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();

        assert_eq!(
            record.find_phone("1111111111").map(PhoneNumber::as_str),
            Some("1111111111")
        );
        assert!(record.find_phone("2222222222").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1992").unwrap();

        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_birthday("01.01.1990").unwrap();

        assert!(record.add_birthday("31.02.1990").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1990");
    }

    #[test]
    fn test_display_without_birthday() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();

        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_display_with_birthday() {
        let mut record = ContactRecord::new("Jane").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_birthday("10.06.1990").unwrap();

        assert_eq!(
            record.to_string(),
            "Contact name: Jane, phones: 1234567890, birthday: 10.06.1990"
        );
    }

    #[test]
    fn test_display_no_phones() {
        let record = ContactRecord::new("Solo").unwrap();
        assert_eq!(record.to_string(), "Contact name: Solo, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = ContactRecord::new("Jane").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_birthday("10.06.1990").unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane",
                "phones": ["1234567890"],
                "birthday": "10.06.1990"
            })
        );

        let back: ContactRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_validates_fields() {
        let result: Result<ContactRecord, _> =
            serde_json::from_str(r#"{"name": "Jane", "phones": ["12"]}"#);
        assert!(result.is_err());

        let result: Result<ContactRecord, _> = serde_json::from_str(r#"{"name": ""}"#);
        assert!(result.is_err());
    }
}

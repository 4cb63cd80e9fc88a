//! Contact record model.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Local, NaiveDate};
use std::fmt;

/// One contact in the book: a name, an ordered list of phone numbers, and
/// an optional birthday.
///
/// The phone list preserves insertion order and allows duplicates. All
/// phone mutations go through [`PhoneNumber`] validation, so a failed
/// operation leaves the record exactly as it was.
///
/// # Example
///
/// ```
/// use rolodex::ContactRecord;
///
/// let mut record = ContactRecord::new("John").unwrap();
/// record.add_phone("5551234567").unwrap();
/// assert_eq!(record.to_string(), "Contact name: John, phones: 5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a record with a birthday parsed from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` or
    /// `ValidationError::InvalidBirthday`.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: &str,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(name)?;
        record.set_birthday(birthday)?;
        Ok(record)
    }

    /// The contact's name. Never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one is on file.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Parse and store a birthday, replacing any previous one.
    ///
    /// The record is unchanged if parsing fails.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Validate `value` and append it to the phone list.
    ///
    /// The list is unchanged if validation fails.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with a revalidated `new`.
    ///
    /// Presence of `old` is checked before `new` is validated, so an edit
    /// of an absent number reports `PhoneNotFound` even when the
    /// replacement is also invalid.
    ///
    /// # Errors
    ///
    /// `RecordError::PhoneNotFound` if no phone equals `old`;
    /// `RecordError::Validation` if `new` has an invalid format. The
    /// original entry is untouched on either failure.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let position = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        self.phones[position] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Remove the first phone equal to `value`. Absence is a no-op.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(position) = self.phones.iter().position(|phone| phone.as_str() == value) {
            self.phones.remove(position);
        }
    }

    /// Find the first phone equal to `value`, by insertion order.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Signed days from today (local calendar date) to the stored birthday.
    ///
    /// Negative when the stored date lies in the past. `None` when no
    /// birthday is on file.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Same as [`days_to_birthday`](Self::days_to_birthday), measured from
    /// an explicit `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|birthday| birthday.days_from(today))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phone(name: &str, phone: &str) -> ContactRecord {
        let mut record = ContactRecord::new(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(ContactRecord::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let mut record = ContactRecord::new("Ann").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap(); // duplicates allowed

        let phones: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1234567890", "0987654321", "1234567890"]);
    }

    #[test]
    fn test_add_phone_invalid_leaves_list_unchanged() {
        let mut record = record_with_phone("Ann", "1234567890");
        assert!(record.add_phone("123").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_first_match() {
        let mut record = record_with_phone("Ann", "1234567890");
        record.edit_phone("1234567890", "0987654321").unwrap();

        assert!(record.find_phone("0987654321").is_some());
        assert!(record.find_phone("1234567890").is_none());
    }

    #[test]
    fn test_edit_phone_absent_is_not_found() {
        let mut record = record_with_phone("Ann", "1234567890");
        let err = record.edit_phone("0000000000", "0987654321").unwrap_err();

        assert!(matches!(err, RecordError::PhoneNotFound(_)));
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_edit_phone_checks_presence_before_validating() {
        let mut record = record_with_phone("Ann", "1234567890");
        let err = record.edit_phone("0000000000", "bogus").unwrap_err();
        assert!(matches!(err, RecordError::PhoneNotFound(_)));
    }

    #[test]
    fn test_edit_phone_invalid_new_keeps_original() {
        let mut record = record_with_phone("Ann", "1234567890");
        let err = record.edit_phone("1234567890", "123").unwrap_err();

        assert!(matches!(err, RecordError::Validation(_)));
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut record = record_with_phone("Ann", "1234567890");
        record.remove_phone("0000000000");
        assert_eq!(record.phones().len(), 1);

        record.remove_phone("1234567890");
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_find_phone_first_by_insertion_order() {
        let mut record = ContactRecord::new("Ann").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();

        let found = record.find_phone("1234567890").unwrap();
        assert!(std::ptr::eq(found, &record.phones()[0]));
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_days_to_birthday_signed() {
        let mut record = ContactRecord::new("Ann").unwrap();
        record.set_birthday("2026-06-10").unwrap();

        let before = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let after = NaiveDate::from_ymd_opt(2026, 6, 20).unwrap();
        assert_eq!(record.days_to_birthday_from(before), Some(9));
        assert_eq!(record.days_to_birthday_from(after), Some(-10));
    }

    #[test]
    fn test_days_to_birthday_absent() {
        let record = ContactRecord::new("Ann").unwrap();
        assert_eq!(record.days_to_birthday(), None);
    }

    #[test]
    fn test_display_format() {
        let mut record = ContactRecord::new("John").unwrap();
        assert_eq!(record.to_string(), "Contact name: John, phones: ");

        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 0987654321"
        );
    }

    #[test]
    fn test_with_birthday_constructor() {
        let record = ContactRecord::with_birthday("Ann", "1990-05-17").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "1990-05-17");

        assert!(ContactRecord::with_birthday("Ann", "1990-31-12").is_err());
    }
}

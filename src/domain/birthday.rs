//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shape of an ISO-8601 calendar date.
static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// A type-safe wrapper for a contact's birthday.
///
/// Parsed from an ISO-8601 `YYYY-MM-DD` string at construction time, so a
/// stored birthday is always a real calendar date.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::parse("1990-05-17").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from a `YYYY-MM-DD` string.
    ///
    /// Rejects both malformed shapes (`17-05-1990`) and impossible dates
    /// (`1990-13-01`).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` carrying the offending
    /// input.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !ISO_DATE_RE.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))?;

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Signed number of days from `today` to this date.
    ///
    /// Negative when the date lies in the past relative to `today`.
    pub fn days_from(&self, today: NaiveDate) -> i64 {
        (self.0 - today).num_days()
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

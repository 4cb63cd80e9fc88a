//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten characters long.
    PhoneWrongLength(String),

    /// The provided phone number contains a non-digit character.
    PhoneNonDigit(String),

    /// The provided birthday is not a valid `YYYY-MM-DD` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::PhoneWrongLength(phone) => {
                write!(f, "Phone number must be 10 digits long: {}", phone)
            }
            Self::PhoneNonDigit(phone) => {
                write!(f, "Phone number must contain only digits: {}", phone)
            }
            Self::InvalidBirthday(value) => {
                write!(f, "Invalid birthday date (expected YYYY-MM-DD): {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

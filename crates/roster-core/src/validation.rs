//! Field rules for candidate records.
//!
//! Rules are checked in form order. [`validate`] stops at the first failing
//! field, which is what the add flow reports; [`validate_all`] collects every
//! failure for callers that want to flag all fields at once.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::person::{Field, NewPerson, ValidPerson, PHONE_DIGITS};
use crate::regions::{is_known_state, is_valid_location};

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("valid name regex"));
// Coarse shape check, unanchored: something@something.something
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

/// A rejected field and the message to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    /// Error with the default "Invalid <Label>" message.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            message: format!("Invalid {}", field.label()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Check a single field of a candidate.
pub fn check_field(candidate: &NewPerson, field: Field) -> Result<(), ValidationError> {
    let value = candidate.get(field);
    let ok = match field {
        Field::FirstName | Field::LastName => is_valid_name(value),
        Field::Email => is_valid_email(value),
        Field::Phone => is_valid_phone(value),
        Field::State => is_known_state(value),
        Field::City => !value.is_empty() && is_valid_location(&candidate.state, value),
    };
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(field))
    }
}

/// Validate a candidate, reporting the first failing field.
pub fn validate(candidate: &NewPerson) -> Result<ValidPerson, ValidationError> {
    for field in Field::ALL {
        check_field(candidate, field)?;
    }
    Ok(ValidPerson::from_checked(candidate.clone()))
}

/// Every failing field, in form order. Empty when [`validate`] would accept.
pub fn validate_all(candidate: &NewPerson) -> Vec<ValidationError> {
    Field::ALL
        .into_iter()
        .filter_map(|field| check_field(candidate, field).err())
        .collect()
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Phone values are expected to have gone through the input mask already.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

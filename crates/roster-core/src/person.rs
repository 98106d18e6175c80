//! Person domain model.
//!
//! A `Person` is the only entity Roster stores. Records are created from a
//! [`NewPerson`] candidate once it has been validated, and are never mutated
//! afterwards; the only lifecycle event after creation is deletion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RosterError;
use crate::regions::cities_for;

/// Number of digits a stored phone number carries.
pub const PHONE_DIGITS: usize = 10;

/// Opaque, immutable record identifier.
///
/// Ids minted here are UUID v7 strings, so they sort by creation time. Ids
/// already present in storage are accepted verbatim whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Mint a fresh, time-ordered identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A persisted contact record.
///
/// Serialized with camelCase keys so the stored array stays
/// `{id, firstName, lastName, email, phone, state, city}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
    pub city: String,
}

impl Person {
    /// The record's field values as a candidate, for re-checking or
    /// per-field access through [`NewPerson::get`].
    pub fn to_candidate(&self) -> NewPerson {
        NewPerson {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
        }
    }

    /// "First Last" for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// User-editable fields of a person, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    State,
    City,
}

impl Field {
    /// All fields in the order the validator checks them.
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::State,
        Field::City,
    ];

    /// Human-readable label ("First Name").
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::State => "State",
            Field::City => "City",
        }
    }

    /// Key used in the stored JSON objects ("firstName").
    pub fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::State => "state",
            Field::City => "city",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        Field::ALL
            .into_iter()
            .find(|field| field.key().to_ascii_lowercase() == wanted)
            .ok_or_else(|| RosterError::InvalidInput(format!("Unknown field: {}", s)))
    }
}

/// Apply the phone input mask: keep ASCII digits only, at most ten of them.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect()
}

/// A candidate record: raw form values that have not been validated yet.
///
/// Field updates go through [`NewPerson::set`], which applies the same
/// input rules as the add form: the phone mask, and clearing a city that
/// does not belong to a newly chosen state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
    pub city: String,
}

impl NewPerson {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field as a form keystroke would.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = normalize_phone(&value),
            Field::State => {
                if !cities_for(&value).contains(&self.city.as_str()) {
                    self.city.clear();
                }
                self.state = value;
            }
            Field::City => self.city = value,
        }
    }

    /// Builder-style variant of [`NewPerson::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::State => &self.state,
            Field::City => &self.city,
        }
    }

    /// Fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

/// A candidate that passed every field rule.
///
/// Only the validator can build one, so a `Person` produced through
/// [`ValidPerson::into_person`] always satisfies the record invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPerson {
    inner: NewPerson,
}

impl ValidPerson {
    pub(crate) fn from_checked(inner: NewPerson) -> Self {
        Self { inner }
    }

    pub fn candidate(&self) -> &NewPerson {
        &self.inner
    }

    /// Attach an identifier, producing the record to persist.
    pub fn into_person(self, id: PersonId) -> Person {
        let NewPerson {
            first_name,
            last_name,
            email,
            phone,
            state,
            city,
        } = self.inner;
        Person {
            id,
            first_name,
            last_name,
            email,
            phone,
            state,
            city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_strips_and_truncates() {
        assert_eq!(normalize_phone("(987) 654-3210 ext99"), "9876543210");
        assert_eq!(normalize_phone("12-34a567890123"), "1234567890");
        assert_eq!(normalize_phone("555-12"), "55512");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn test_normalize_phone_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not part of the mask.
        assert_eq!(normalize_phone("١٢٣98"), "98");
    }

    #[test]
    fn test_set_phone_applies_mask() {
        let mut candidate = NewPerson::new();
        candidate.set(Field::Phone, "+1 (987) 654-3210");
        assert_eq!(candidate.phone, "1987654321");
    }

    #[test]
    fn test_changing_state_clears_foreign_city() {
        let mut candidate = NewPerson::new()
            .with(Field::State, "Gujarat")
            .with(Field::City, "Surat");
        candidate.set(Field::State, "Rajasthan");
        assert_eq!(candidate.state, "Rajasthan");
        assert!(candidate.city.is_empty());
    }

    #[test]
    fn test_setting_state_keeps_matching_city() {
        let candidate = NewPerson::new()
            .with(Field::City, "Pune")
            .with(Field::State, "Maharashtra");
        assert_eq!(candidate.city, "Pune");
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let candidate = NewPerson::new()
            .with(Field::FirstName, "Ada")
            .with(Field::Email, "ada@example.com");
        assert_eq!(
            candidate.missing_fields(),
            vec![Field::LastName, Field::Phone, Field::State, Field::City]
        );
    }

    #[test]
    fn test_person_serializes_camel_case() {
        let person = Person {
            id: PersonId::new("1700000000000"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "9876543210".to_string(),
            state: "Gujarat".to_string(),
            city: "Surat".to_string(),
        };
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["id"], "1700000000000");
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["lastName"], "Lovelace");
        assert!(value.get("first_name").is_none());
    }

    #[test]
    fn test_to_candidate_round_trips_through_validation() {
        let candidate = NewPerson::new()
            .with(Field::FirstName, "Ada")
            .with(Field::LastName, "Lovelace")
            .with(Field::Email, "ada@example.com")
            .with(Field::Phone, "9876543210")
            .with(Field::State, "Gujarat")
            .with(Field::City, "Surat");
        let person = crate::validation::validate(&candidate)
            .unwrap()
            .into_person(PersonId::new("1"));

        let back = person.to_candidate();
        assert_eq!(back, candidate);
        assert_eq!(back.get(Field::City), "Surat");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = PersonId::generate();
        let b = PersonId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_field_from_str_accepts_common_spellings() {
        assert_eq!("firstName".parse::<Field>().unwrap(), Field::FirstName);
        assert_eq!("first-name".parse::<Field>().unwrap(), Field::FirstName);
        assert_eq!("CITY".parse::<Field>().unwrap(), Field::City);
        assert!("zip".parse::<Field>().is_err());
    }
}

//! Record store: the person collection kept in a single storage slot.
//!
//! Every mutation reads the whole collection, changes it in memory, and
//! writes the whole collection back. There is no locking; two processes
//! writing the same slot race and the last writer wins.

use tracing::{debug, warn};

use crate::error::{Result, RosterError};
use crate::person::{NewPerson, Person, PersonId};
use crate::storage::KeyValueStorage;
use crate::validation::validate;

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "persons";

/// Durable person collection over a [`KeyValueStorage`] slot.
pub struct RecordStore<S> {
    storage: S,
    slot: String,
}

impl<S: KeyValueStorage> RecordStore<S> {
    /// Store using the default `persons` slot.
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT)
    }

    pub fn with_slot(storage: S, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Every stored record, in insertion order.
    ///
    /// A missing, unreadable or unparsable slot reads as an empty collection;
    /// this never fails the caller.
    pub fn load_all(&self) -> Vec<Person> {
        let raw = match self.storage.get(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(slot = %self.slot, error = %err, "slot unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Person>>(&raw) {
            Ok(persons) => persons,
            Err(err) => {
                warn!(slot = %self.slot, error = %err, "slot payload unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Look up a single record.
    pub fn get(&self, id: &PersonId) -> Option<Person> {
        self.load_all().into_iter().find(|person| &person.id == id)
    }

    /// Append a record and persist the full collection.
    ///
    /// The record is checked against the same field rules as [`add`], so a
    /// hand-built `Person` cannot bypass them. Nothing is written on failure.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Validation` naming the first invalid field,
    /// `RosterError::InvalidInput` if the id is empty or already stored, or
    /// `RosterError::Storage` if the write fails.
    ///
    /// [`add`]: RecordStore::add
    pub fn append(&mut self, person: Person) -> Result<()> {
        if person.id.as_str().trim().is_empty() {
            return Err(RosterError::InvalidInput(
                "Person id cannot be empty".to_string(),
            ));
        }
        validate(&person.to_candidate())?;
        self.insert(person)
    }

    fn insert(&mut self, person: Person) -> Result<()> {
        let mut persons = self.load_all();
        if persons.iter().any(|existing| existing.id == person.id) {
            return Err(RosterError::InvalidInput(format!(
                "Duplicate person id: {}",
                person.id
            )));
        }
        debug!(slot = %self.slot, id = %person.id, "appending person");
        persons.push(person);
        self.save(&persons)
    }

    /// Validate a candidate, assign a fresh id, and append it.
    ///
    /// Nothing is read or written when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Validation` naming the first invalid field, or
    /// `RosterError::Storage` if the write fails.
    pub fn add(&mut self, candidate: &NewPerson) -> Result<Person> {
        let valid = validate(candidate)?;
        let person = valid.into_person(PersonId::generate());
        self.insert(person.clone())?;
        Ok(person)
    }

    /// Remove the record with `id`, if any, and persist the rest.
    ///
    /// Returns `Ok(false)` without touching storage when no record matches.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Storage` if the write fails.
    pub fn delete_by_id(&mut self, id: &PersonId) -> Result<bool> {
        let mut persons = self.load_all();
        let Some(index) = persons.iter().position(|person| &person.id == id) else {
            debug!(slot = %self.slot, id = %id, "delete of unknown id ignored");
            return Ok(false);
        };
        persons.remove(index);
        debug!(slot = %self.slot, id = %id, remaining = persons.len(), "deleted person");
        self.save(&persons)?;
        Ok(true)
    }

    fn save(&mut self, persons: &[Person]) -> Result<()> {
        let payload = serde_json::to_string(persons)?;
        self.storage.set(&self.slot, &payload)
    }
}

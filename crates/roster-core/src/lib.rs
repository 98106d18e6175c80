//! # Roster Core
//!
//! Core library for Roster - a small contact list kept in a single
//! key-value slot.
//!
//! This crate provides the data model, validation rules, storage
//! abstraction and search, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **person**: `Person`, candidate records and the phone input mask
//! - **regions**: fixed state → city lookup table
//! - **validation**: field rules for candidate records
//! - **storage**: key-value slot trait with memory and file backends
//! - **store**: the person collection persisted in one slot
//! - **query**: free-text search over loaded records

pub mod error;
pub mod fs;
pub mod person;
pub mod query;
pub mod regions;
pub mod storage;
pub mod store;
pub mod validation;

pub use error::{Result, RosterError};
pub use person::{normalize_phone, Field, NewPerson, Person, PersonId, ValidPerson};
pub use query::{filter, SearchQuery};
pub use regions::{cities_for, states};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{RecordStore, DEFAULT_SLOT};
pub use validation::{validate, validate_all, ValidationError};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

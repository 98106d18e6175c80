//! Key-value storage trait definition.
//!
//! `KeyValueStorage` models a flat set of named string slots, the same shape
//! as a browser's local storage. The record store keeps its whole collection
//! in one slot, so any backend that can hold a string per key will do.

use crate::error::Result;

/// Named string slots.
///
/// Implementations must ensure:
/// - `set` replaces the whole value of a slot; readers never observe a
///   partially written value
/// - `get` on a slot that was never written returns `Ok(None)`
pub trait KeyValueStorage {
    /// Read a slot.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if the slot exists, `Ok(None)` if not.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Storage` if the backend cannot be read, or
    /// `RosterError::InvalidInput` if the key is not usable by the backend.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Storage` if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing a missing slot is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn write_through<T: KeyValueStorage>(mut storage: T) {
        storage.set("k", "v").unwrap();
    }

    #[test]
    fn test_borrowed_and_boxed_storage_forward() {
        let mut storage = MemoryStorage::new();
        write_through(&mut storage);

        let boxed: Box<dyn KeyValueStorage> = Box::new(storage);
        assert_eq!(boxed.get("k").unwrap().as_deref(), Some("v"));
        write_through(boxed);
    }
}

use crate::errors::CoreError;

/// Device-local key-value storage: the durable boundary of the deal store.
///
/// Each key is one slot holding a whole text blob. `set` replaces the slot
/// outright, so with several writers the last write wins. Hosts that share a
/// slot between windows must forward change notifications themselves
/// (see [`DealStore::reload`](super::deal_store::DealStore::reload)).
pub trait KeyValueStore {
    /// Read a slot. `Ok(None)` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Overwrite a slot.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete a slot. Deleting a missing slot is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        (**self).remove(key)
    }
}

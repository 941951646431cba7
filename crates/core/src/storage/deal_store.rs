use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::deal::{DealId, DealRecord};

use super::traits::KeyValueStore;

/// Ordered collection of saved deals, mirrored to one storage slot.
///
/// - Newest first: `append` inserts at the front.
/// - Full snapshot persistence: every mutation rewrites the whole slot as a
///   JSON array. There is no incremental log and no dirty flag.
/// - Reads never fail: a missing, unreadable or malformed slot loads as an
///   empty collection.
/// - Writes are best effort: a failed write is logged and the in-memory
///   collection stays authoritative for the rest of the session.
///
/// No capacity cap is applied; the UI decides how many to show via
/// [`DealStore::recent`].
pub struct DealStore<S: KeyValueStore> {
    backend: S,
    key: String,
    records: Vec<DealRecord>,
}

impl<S: KeyValueStore> std::fmt::Debug for DealStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DealStore")
            .field("key", &self.key)
            .field("records", &self.records.len())
            .finish()
    }
}

impl<S: KeyValueStore> DealStore<S> {
    /// Read the slot `key` from `backend` and build the store.
    pub fn load(backend: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = read_slot(&backend, &key);
        debug!(key = %key, count = records.len(), "loaded saved deals");
        Self {
            backend,
            key,
            records,
        }
    }

    /// Re-read the slot, discarding the in-memory collection.
    /// For hosts that learn another writer changed the slot.
    pub fn reload(&mut self) {
        self.records = read_slot(&self.backend, &self.key);
        debug!(key = %self.key, count = self.records.len(), "reloaded saved deals");
    }

    /// Insert a record at the front and persist.
    ///
    /// Returns `false` (and changes nothing) if a record with the same id is
    /// already stored.
    pub fn append(&mut self, record: DealRecord) -> bool {
        if self.contains(&record.id) {
            warn!(id = %record.id, "ignoring deal with duplicate id");
            return false;
        }
        self.records.insert(0, record);
        self.persist();
        true
    }

    /// [`append`](Self::append) that reports the write instead of logging it.
    ///
    /// `Ok(false)` for a duplicate id (nothing written). On `Err` the record
    /// is still kept in memory.
    pub fn try_append(&mut self, record: DealRecord) -> Result<bool, CoreError> {
        if self.contains(&record.id) {
            return Ok(false);
        }
        self.records.insert(0, record);
        self.flush()?;
        Ok(true)
    }

    /// Remove the record with `id` and persist. Absent ids are a no-op.
    pub fn remove(&mut self, id: &DealId) -> Option<DealRecord> {
        let idx = self.records.iter().position(|r| &r.id == id)?;
        let removed = self.records.remove(idx);
        self.persist();
        Some(removed)
    }

    /// [`remove`](Self::remove) that reports the write instead of logging it.
    /// Absent ids give `Ok(None)` without writing.
    pub fn try_remove(&mut self, id: &DealId) -> Result<Option<DealRecord>, CoreError> {
        let Some(idx) = self.records.iter().position(|r| &r.id == id) else {
            return Ok(None);
        };
        let removed = self.records.remove(idx);
        self.flush()?;
        Ok(Some(removed))
    }

    #[must_use]
    pub fn contains(&self, id: &DealId) -> bool {
        self.records.iter().any(|r| &r.id == id)
    }

    /// Write the full collection now, reporting failure to the caller.
    pub fn flush(&mut self) -> Result<(), CoreError> {
        let json = serde_json::to_string(&self.records)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize deals: {e}")))?;
        self.backend.set(&self.key, &json)
    }

    /// All records, newest first.
    #[must_use]
    pub fn records(&self) -> &[DealRecord] {
        &self.records
    }

    /// The newest `limit` records.
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[DealRecord] {
        &self.records[..limit.min(self.records.len())]
    }

    #[must_use]
    pub fn get(&self, id: &DealId) -> Option<&DealRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Give the backend back, e.g. to reopen the store after a simulated restart.
    pub fn into_backend(self) -> S {
        self.backend
    }

    fn persist(&mut self) {
        match self.flush() {
            Ok(()) => debug!(key = %self.key, count = self.records.len(), "persisted saved deals"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to persist saved deals"),
        }
    }
}

fn read_slot<S: KeyValueStore>(backend: &S, key: &str) -> Vec<DealRecord> {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key = %key, error = %e, "could not read saved deals, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<DealRecord>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(key = %key, error = %e, "saved deals are malformed, starting empty");
            Vec::new()
        }
    }
}

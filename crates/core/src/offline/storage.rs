use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A stored copy of a network response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CachedResponse {
    /// A 200 response with the given content type.
    pub fn ok(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.into()),
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Named caches of responses keyed by request URL (fragment stripped).
///
/// Snapshots are bincode-encoded so the cache survives restarts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStorage {
    caches: BTreeMap<String, BTreeMap<String, CachedResponse>>,
}

impl CacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all caches.
    pub fn keys(&self) -> Vec<String> {
        self.caches.keys().cloned().collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.caches.contains_key(name)
    }

    /// Drop a whole cache. Returns whether it existed.
    pub fn delete(&mut self, name: &str) -> bool {
        self.caches.remove(name).is_some()
    }

    /// Store a response in cache `name`, creating the cache if needed.
    pub fn put(&mut self, name: &str, request_key: &str, response: CachedResponse) {
        self.caches
            .entry(name.to_string())
            .or_default()
            .insert(request_key.to_string(), response);
    }

    /// Look up a request in one cache.
    pub fn get(&self, name: &str, request_key: &str) -> Option<&CachedResponse> {
        self.caches.get(name)?.get(request_key)
    }

    /// Look up a request across every cache, in name order.
    pub fn match_any(&self, request_key: &str) -> Option<&CachedResponse> {
        self.caches.values().find_map(|c| c.get(request_key))
    }

    /// Number of entries in cache `name` (0 if absent).
    pub fn entry_count(&self, name: &str) -> usize {
        self.caches.get(name).map_or(0, |c| c.len())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CoreError> {
        bincode::serialize(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize asset cache: {e}")))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        bincode::deserialize(data)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize asset cache: {e}")))
    }

    /// Save a snapshot to disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), CoreError> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    /// Load a snapshot from disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}
